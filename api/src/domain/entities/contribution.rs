//! Contribution domain entity
//!
//! A pull request authored by the portfolio account, flattened for display.
//! Items are derived per load and never persisted.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Repository shown when the parent-collection URL cannot be parsed
pub const PLACEHOLDER_REPOSITORY: &str = "unknown";

/// Lifecycle classification of a contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Open,
    Merged,
    Closed,
}

impl ItemStatus {
    /// Derive the status from the two source fields.
    ///
    /// A merge timestamp wins over the state flag: merged pull requests also
    /// report `state == "closed"`.
    pub fn derive(merged_at: Option<&str>, state: &str) -> Self {
        if merged_at.is_some() {
            ItemStatus::Merged
        } else if state.eq_ignore_ascii_case("closed") {
            ItemStatus::Closed
        } else {
            ItemStatus::Open
        }
    }

    /// Label shown next to the item
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Open => "Open",
            ItemStatus::Merged => "Merged",
            ItemStatus::Closed => "Closed",
        }
    }

    /// Class name the stylesheet keys its status color on
    pub fn css_class(&self) -> &'static str {
        match self {
            ItemStatus::Open => "status-open",
            ItemStatus::Merged => "status-merged",
            ItemStatus::Closed => "status-closed",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Open => write!(f, "open"),
            ItemStatus::Merged => write!(f, "merged"),
            ItemStatus::Closed => write!(f, "closed"),
        }
    }
}

/// A single contribution as presented in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionItem {
    /// `owner/name` of the repository the pull request targets
    pub repository: String,
    pub title: String,
    /// Display number, e.g. `#42`
    pub sequence_number: String,
    pub status: ItemStatus,
    pub url: String,
    /// ISO 8601 timestamp of the last update
    pub last_updated: String,
}

fn repository_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"/repos/([^/?#]+)/([^/?#]+)").expect("repository pattern is valid")
    })
}

/// Extract `owner/name` from a parent-collection URL such as
/// `https://api.github.com/repos/llvm/llvm-project`.
///
/// Falls back to [`PLACEHOLDER_REPOSITORY`] so one odd item never sinks the batch.
pub fn parse_repository(repository_url: &str) -> String {
    repository_pattern()
        .captures(repository_url)
        .map(|caps| format!("{}/{}", &caps[1], &caps[2]))
        .unwrap_or_else(|| PLACEHOLDER_REPOSITORY.to_string())
}

/// Format an item number for display
pub fn sequence_number(number: i64) -> String {
    format!("#{}", number)
}
