//! Feed mount
//!
//! Owns the state slot for one feed load. `Loading` is observable as soon as
//! `mount` returns; the load runs on a spawned task and publishes its terminal
//! state through a watch channel. Dropping the mount closes the channel, so a
//! late result is discarded instead of landing in a view that is gone.

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::feed_loader::{ContributionFeedLoader, FeedState};
use crate::domain::ports::ContributionSource;

pub struct FeedMount {
    state: watch::Receiver<FeedState>,
}

impl FeedMount {
    /// Start the one load for this mount. Must be called inside a tokio runtime.
    pub fn mount<S>(loader: ContributionFeedLoader<S>) -> Self
    where
        S: ContributionSource + 'static,
    {
        Self::mount_tracked(loader).0
    }

    /// Like [`FeedMount::mount`], also returning the load task. The task
    /// yields whether its result was published.
    pub(crate) fn mount_tracked<S>(loader: ContributionFeedLoader<S>) -> (Self, JoinHandle<bool>)
    where
        S: ContributionSource + 'static,
    {
        let (tx, rx) = watch::channel(FeedState::Loading);

        let task = tokio::spawn(async move {
            let state = loader.load().await;
            if tx.send(state).is_err() {
                tracing::debug!(
                    account = loader.account(),
                    "feed unmounted before load settled, discarding result"
                );
                return false;
            }
            true
        });

        (Self { state: rx }, task)
    }

    /// Snapshot of the current state
    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Wait for the terminal state.
    ///
    /// If the load task died without publishing, the mount reads as failed.
    pub async fn settled(&self) -> FeedState {
        let mut rx = self.state.clone();
        let settled = rx
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| state.clone());
        match settled {
            Ok(state) => state,
            Err(_) => {
                tracing::error!("feed load task ended without publishing a state");
                FeedState::Failed
            }
        }
    }
}
