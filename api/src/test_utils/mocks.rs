//! Mock implementations of port traits
//!
//! In-memory contribution source that can be configured to succeed, fail,
//! or hold its response until a test releases it.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tokio::sync::Notify;

use crate::domain::ports::{ContributionSource, GitHubSearchItem};
use crate::error::GitHubError;

#[derive(Debug, Clone, Copy)]
enum MockFailure {
    Status(u16),
    RateLimited,
    Malformed,
}

#[derive(Default)]
pub struct MockContributionSource {
    items: Vec<GitHubSearchItem>,
    failure: Option<MockFailure>,
    /// (author, limit) per call
    requests: Arc<RwLock<Vec<(String, u32)>>>,
    gate: Option<Arc<Notify>>,
}

impl MockContributionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self {
            failure: Some(MockFailure::Status(status)),
            ..Self::default()
        }
    }

    pub fn rate_limited() -> Self {
        Self {
            failure: Some(MockFailure::RateLimited),
            ..Self::default()
        }
    }

    pub fn malformed() -> Self {
        Self {
            failure: Some(MockFailure::Malformed),
            ..Self::default()
        }
    }

    /// Items returned on success, in order
    pub fn with_items(mut self, items: Vec<GitHubSearchItem>) -> Self {
        self.items = items;
        self
    }

    /// Hold every response until [`MockContributionSource::gate`] is notified
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn gate(&self) -> Arc<Notify> {
        self.gate.clone().expect("source was not built with gated()")
    }

    pub fn call_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }

    pub fn last_request(&self) -> Option<(String, u32)> {
        self.requests.read().unwrap().last().cloned()
    }
}

#[async_trait]
impl ContributionSource for MockContributionSource {
    async fn search_pull_requests(
        &self,
        author: &str,
        limit: u32,
    ) -> Result<Vec<GitHubSearchItem>, GitHubError> {
        self.requests
            .write()
            .unwrap()
            .push((author.to_string(), limit));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.failure {
            Some(MockFailure::Status(status)) => Err(GitHubError::Api {
                status,
                message: "Mock failure".to_string(),
            }),
            Some(MockFailure::RateLimited) => Err(GitHubError::RateLimited),
            Some(MockFailure::Malformed) => Err(GitHubError::Deserialization(
                "expected value at line 1 column 1".to_string(),
            )),
            None => Ok(self.items.iter().take(limit as usize).cloned().collect()),
        }
    }
}
