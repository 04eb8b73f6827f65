//! Feed service
//!
//! Binds the configured account and default page size to a contribution
//! source, and hands out one `FeedMount` per view.

use std::sync::Arc;

use urlencoding::encode;

use super::feed_loader::ContributionFeedLoader;
use super::feed_mount::FeedMount;
use crate::config::clamp_feed_limit;
use crate::domain::ports::ContributionSource;

/// Service for mounting contribution feeds
pub struct FeedService<S>
where
    S: ContributionSource + 'static,
{
    source: Arc<S>,
    account: String,
    default_limit: u32,
}

impl<S> FeedService<S>
where
    S: ContributionSource + 'static,
{
    pub fn new(source: Arc<S>, account: impl Into<String>, default_limit: u32) -> Self {
        Self {
            source,
            account: account.into(),
            default_limit: clamp_feed_limit(default_limit),
        }
    }

    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Public profile page, the fallback target when the feed is unavailable
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", encode(&self.account))
    }

    /// Mount a fresh feed. `limit` falls back to the configured default and is
    /// clamped to the allowed range.
    pub fn mount(&self, limit: Option<u32>) -> FeedMount {
        let limit = limit.map(clamp_feed_limit).unwrap_or(self.default_limit);
        FeedMount::mount(ContributionFeedLoader::new(
            self.source.clone(),
            self.account.clone(),
            limit,
        ))
    }
}
