//! HTTP client for the Folio API
//!
//! Only the JSON endpoints are used; text for the tools is rendered locally.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// HTTP client for communicating with the Folio API
#[derive(Clone)]
pub struct FolioClient {
    client: reqwest::Client,
    base_url: String,
}

impl FolioClient {
    /// Create a new client from environment variables
    ///
    /// Optional env vars:
    /// - FOLIO_API_URL: Base URL of the API (default http://localhost:8080)
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("FOLIO_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        Self::new(&base_url)
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Latest pull requests, in whatever state the feed settled
    pub async fn get_contributions(&self, limit: Option<u32>) -> Result<FeedSnapshot> {
        let path = match limit {
            Some(limit) => format!("/api/contributions?limit={}", limit),
            None => "/api/contributions".to_string(),
        };
        self.get_json(&path).await
    }

    /// Organization affiliations
    pub async fn get_orgs(&self) -> Result<Vec<Org>> {
        self.get_json("/api/orgs").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))?;

        handle_json_response(response).await
    }
}

async fn handle_json_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("API error ({}): {}", status, body);
    }

    serde_json::from_str(&body).context("Failed to parse API response")
}

// --- Response Types ---

/// Feed state as served by `/api/contributions`
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FeedSnapshot {
    Loading,
    Failed,
    Loaded { items: Vec<Contribution> },
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Contribution {
    pub repository: String,
    pub title: String,
    pub sequence_number: String,
    pub status: String, // "open", "merged", "closed"
    pub url: String,
    pub last_updated: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Org {
    pub name: String,
    pub role: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = FolioClient::new("http://localhost:8080").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = FolioClient::new("https://folio.example.com/").unwrap();
        assert_eq!(client.base_url(), "https://folio.example.com");
    }

    #[test]
    fn test_feed_snapshot_failed() {
        let snapshot: FeedSnapshot = serde_json::from_str(r#"{"state":"failed"}"#).unwrap();
        assert_eq!(snapshot, FeedSnapshot::Failed);
    }

    #[test]
    fn test_feed_snapshot_loaded() {
        let json = r##"{
            "state": "loaded",
            "items": [{
                "repository": "llvm/llvm-project",
                "title": "Fix handling of edge cases in IR pass",
                "sequence_number": "#101",
                "status": "merged",
                "url": "https://github.com/llvm/llvm-project/pull/101",
                "last_updated": "2024-05-01T10:00:00Z"
            }]
        }"##;
        let snapshot: FeedSnapshot = serde_json::from_str(json).unwrap();
        match snapshot {
            FeedSnapshot::Loaded { items } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].status, "merged");
                assert_eq!(items[0].sequence_number, "#101");
            }
            other => panic!("expected loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_org_deserialize() {
        let json = r#"{"name": "LLVM", "role": "contributor", "url": "https://github.com/llvm"}"#;
        let org: Org = serde_json::from_str(json).unwrap();
        assert_eq!(org.name, "LLVM");
        assert_eq!(org.role, "contributor");
    }
}
