//! Relative timestamps ("3 days ago") for the feed rows.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Describe `timestamp` relative to `now`.
///
/// Unparseable input is returned unchanged; timestamps in the future read as
/// "just now".
pub fn relative_time(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(then) = DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };

    let elapsed = (now - then.with_timezone(&Utc)).num_seconds();
    if elapsed < MINUTE {
        return "just now".to_string();
    }

    let (count, unit) = if elapsed < HOUR {
        (elapsed / MINUTE, "minute")
    } else if elapsed < DAY {
        (elapsed / HOUR, "hour")
    } else if elapsed < MONTH {
        (elapsed / DAY, "day")
    } else if elapsed < YEAR {
        (elapsed / MONTH, "month")
    } else {
        (elapsed / YEAR, "year")
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(relative_time("2024-06-01T11:59:30Z", now()), "just now");
    }

    #[test]
    fn future_is_just_now() {
        assert_eq!(relative_time("2024-06-02T00:00:00Z", now()), "just now");
    }

    #[test]
    fn minutes_and_hours() {
        assert_eq!(relative_time("2024-06-01T11:59:00Z", now()), "1 minute ago");
        assert_eq!(relative_time("2024-06-01T11:15:00Z", now()), "45 minutes ago");
        assert_eq!(relative_time("2024-06-01T09:00:00Z", now()), "3 hours ago");
    }

    #[test]
    fn days_months_years() {
        assert_eq!(relative_time("2024-05-31T12:00:00Z", now()), "1 day ago");
        assert_eq!(relative_time("2024-05-01T12:00:00Z", now()), "1 month ago");
        assert_eq!(relative_time("2024-01-01T12:00:00Z", now()), "5 months ago");
        assert_eq!(relative_time("2022-05-01T12:00:00Z", now()), "2 years ago");
    }

    #[test]
    fn offsets_are_normalized() {
        assert_eq!(
            relative_time("2024-06-01T14:00:00+05:00", now()),
            "3 hours ago"
        );
    }

    #[test]
    fn garbage_passes_through() {
        assert_eq!(relative_time("yesterday-ish", now()), "yesterday-ish");
    }
}
