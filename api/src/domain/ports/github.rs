//! GitHub client port trait
//!
//! Defines the interface the feed loader needs from the GitHub search API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GitHubError;

/// Pull request details attached to a search result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubPullRequestRef {
    #[serde(default)]
    pub merged_at: Option<String>,
}

/// A single item from `/search/issues`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubSearchItem {
    pub number: i64,
    pub title: String,
    /// Parent-collection URL, e.g. `https://api.github.com/repos/{owner}/{name}`
    pub repository_url: String,
    pub state: String, // "open", "closed"
    #[serde(default)]
    pub pull_request: Option<GitHubPullRequestRef>,
    pub html_url: String,
    pub updated_at: String,
}

impl GitHubSearchItem {
    pub fn merged_at(&self) -> Option<&str> {
        self.pull_request
            .as_ref()
            .and_then(|pr| pr.merged_at.as_deref())
    }
}

/// Envelope returned by `/search/issues`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubSearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<GitHubSearchItem>,
}

/// Port trait for the contribution search
#[async_trait]
pub trait ContributionSource: Send + Sync {
    /// Pull requests authored by `author`, most recently updated first,
    /// at most `limit` of them. Issues exactly one request.
    async fn search_pull_requests(
        &self,
        author: &str,
        limit: u32,
    ) -> Result<Vec<GitHubSearchItem>, GitHubError>;
}
