//! Test fixtures
//!
//! Factory functions for GitHub search items with sensible defaults.

use crate::domain::ports::{GitHubPullRequestRef, GitHubSearchItem};

/// Build a search item for `repo` (`owner/name`)
pub fn search_item(
    number: i64,
    repo: &str,
    state: &str,
    merged_at: Option<&str>,
) -> GitHubSearchItem {
    GitHubSearchItem {
        number,
        title: format!("Pull request {} in {}", number, repo),
        repository_url: format!("https://api.github.com/repos/{}", repo),
        state: state.to_string(),
        pull_request: Some(GitHubPullRequestRef {
            merged_at: merged_at.map(str::to_string),
        }),
        html_url: format!("https://github.com/{}/pull/{}", repo, number),
        updated_at: "2024-05-01T10:00:00Z".to_string(),
    }
}

pub fn open_item(number: i64, repo: &str) -> GitHubSearchItem {
    search_item(number, repo, "open", None)
}

pub fn closed_item(number: i64, repo: &str) -> GitHubSearchItem {
    search_item(number, repo, "closed", None)
}

/// Merged pull requests report `state == "closed"` as well
pub fn merged_item(number: i64, repo: &str) -> GitHubSearchItem {
    search_item(number, repo, "closed", Some("2024-04-30T08:00:00Z"))
}

/// JSON body of a `/search/issues` response holding `items`
pub fn search_response_json(items: &[GitHubSearchItem]) -> String {
    serde_json::json!({
        "total_count": items.len(),
        "incomplete_results": false,
        "items": items,
    })
    .to_string()
}
