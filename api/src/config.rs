use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Largest page of contributions a single mount may request.
///
/// The search API allows more, but unauthenticated callers share a small
/// rate-limit budget.
pub const MAX_FEED_LIMIT: u32 = 10;

pub const DEFAULT_FEED_LIMIT: u32 = 6;

#[derive(Clone, Debug)]
pub struct Config {
    pub github_api_url: String,
    /// Personal access token; raises the search rate limit when set
    pub github_token: Option<String>,
    pub github_timeout: Duration,
    /// Account whose pull requests make up the feed
    pub account: String,
    pub feed_limit: u32,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let feed_limit = configured_feed_limit(parse_var("FEED_LIMIT", DEFAULT_FEED_LIMIT)?);

        Ok(Self {
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            github_timeout: Duration::from_secs(parse_var("GITHUB_TIMEOUT_SECS", 10u64)?),
            account: env::var("FOLIO_ACCOUNT").unwrap_or_else(|_| "mugiwaraluffy56".to_string()),
            feed_limit,
            port: parse_var("PORT", 8080u16)?,
        })
    }
}

/// Clamp a requested page size into `1..=MAX_FEED_LIMIT`
pub fn clamp_feed_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_FEED_LIMIT)
}

/// Clamp the configured page size, warning when it was out of range
fn configured_feed_limit(requested: u32) -> u32 {
    let clamped = clamp_feed_limit(requested);
    if clamped != requested {
        tracing::warn!(
            requested,
            using = clamped,
            "FEED_LIMIT out of range, clamping"
        );
    }
    clamped
}

fn parse_var<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}
