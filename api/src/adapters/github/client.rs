//! GitHub API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::ports::{ContributionSource, GitHubSearchItem, GitHubSearchResponse};
use crate::error::GitHubError;

/// Versioned media type for the REST API
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Implementation of the GitHub search client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
}

impl GitHubClientImpl {
    pub fn new(
        base_url: String,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        // GitHub rejects requests without a user agent
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("folio-api/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| GitHubError::Unauthorized)?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GitHubError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GitHubError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(GitHubError::Unauthorized)
        } else if status.as_u16() == 429 || is_secondary_rate_limit(&response) {
            Err(GitHubError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// GitHub signals exhausted quota with 403 and a zero remaining count
fn is_secondary_rate_limit(response: &reqwest::Response) -> bool {
    response.status().as_u16() == 403
        && response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v == "0")
            .unwrap_or(false)
}

/// Search qualifier selecting pull requests by one author
fn pull_request_query(author: &str) -> String {
    format!("author:{} type:pr", author)
}

#[async_trait]
impl ContributionSource for GitHubClientImpl {
    async fn search_pull_requests(
        &self,
        author: &str,
        limit: u32,
    ) -> Result<Vec<GitHubSearchItem>, GitHubError> {
        let query = pull_request_query(author);
        let per_page = limit.to_string();
        let resp = self
            .http
            .get(self.api_url("/search/issues"))
            .query(&[
                ("q", query.as_str()),
                ("sort", "updated"),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?;

        let body: GitHubSearchResponse = self.handle_response(resp).await?;
        if body.incomplete_results {
            tracing::debug!(author, "search returned incomplete results");
        }
        Ok(body.items)
    }
}
