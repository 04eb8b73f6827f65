//! Contribution feed loader
//!
//! One-shot load of an account's recent pull requests. Every failure mode
//! (transport, non-2xx, malformed payload) collapses into `FeedState::Failed`;
//! nothing is retried and no error escapes the loader.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{parse_repository, sequence_number, ContributionItem, ItemStatus};
use crate::domain::ports::{ContributionSource, GitHubSearchItem};

/// Renderable state of one feed mount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FeedState {
    Loading,
    Failed,
    Loaded { items: Vec<ContributionItem> },
}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    /// Items, if the load succeeded
    #[allow(dead_code)]
    pub fn items(&self) -> Option<&[ContributionItem]> {
        match self {
            FeedState::Loaded { items } => Some(items),
            _ => None,
        }
    }
}

/// Flatten a search result into a display item
pub fn map_item(item: GitHubSearchItem) -> ContributionItem {
    let status = ItemStatus::derive(item.merged_at(), &item.state);
    ContributionItem {
        repository: parse_repository(&item.repository_url),
        title: item.title,
        sequence_number: sequence_number(item.number),
        status,
        url: item.html_url,
        last_updated: item.updated_at,
    }
}

/// Loads the contribution feed for a fixed account
pub struct ContributionFeedLoader<S>
where
    S: ContributionSource,
{
    source: Arc<S>,
    account: String,
    limit: u32,
}

impl<S> ContributionFeedLoader<S>
where
    S: ContributionSource,
{
    pub fn new(source: Arc<S>, account: impl Into<String>, limit: u32) -> Self {
        Self {
            source,
            account: account.into(),
            limit,
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// Run the single request and resolve to a terminal state.
    ///
    /// Source order is kept; the request already sorts by last update.
    pub async fn load(&self) -> FeedState {
        match self
            .source
            .search_pull_requests(&self.account, self.limit)
            .await
        {
            Ok(items) => {
                let items: Vec<ContributionItem> = items.into_iter().map(map_item).collect();
                if items.is_empty() {
                    tracing::info!(account = %self.account, "no pull requests found");
                } else {
                    tracing::debug!(
                        account = %self.account,
                        count = items.len(),
                        "contribution feed loaded"
                    );
                }
                FeedState::Loaded { items }
            }
            Err(e) => {
                tracing::warn!(error = %e, account = %self.account, "contribution feed failed");
                FeedState::Failed
            }
        }
    }
}
