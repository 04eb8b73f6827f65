//! Contribution feed handlers
//!
//! Supports content negotiation: Accept: application/json for the feed state
//! as JSON, otherwise the rendered section as HTML.
//! A failed load is a state, not an HTTP error, so both render with 200.
//! With `wait=false` the freshly mounted state is rendered as-is, which is the
//! loading skeleton the page shows before the feed arrives.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::config::clamp_feed_limit;
use crate::domain::entities::ORG_AFFILIATIONS;
use crate::error::AppError;
use crate::feed::{render_section, FeedContext};
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

#[derive(Debug, Deserialize)]
pub struct ContributionsQuery {
    /// Number of pull requests to show; clamped to the allowed range
    pub limit: Option<u32>,
    /// Wait for the load to settle (default). `false` renders the mount as
    /// first observed.
    pub wait: Option<bool>,
}

/// GET /api/contributions
///
/// Mounts a fresh feed and waits for it to settle, unless `wait=false`.
/// - Accept: application/json → `{"state": ...}` JSON
/// - Otherwise → HTML fragment of the open source section
pub async fn get_contributions(
    State(state): State<AppState>,
    query: Result<Query<ContributionsQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if query.limit == Some(0) {
        return Err(AppError::BadRequest("limit must be at least 1".to_string()));
    }

    let mount = state.feed_service.mount(query.limit);
    let feed = if query.wait.unwrap_or(true) {
        mount.settled().await
    } else {
        // The mount drops on return, so the pending load is discarded.
        mount.state()
    };

    if wants_json(&headers) {
        return Ok(Json(feed).into_response());
    }

    let profile_url = state.feed_service.profile_url();
    let ctx = FeedContext {
        profile_url: &profile_url,
        skeleton_rows: query
            .limit
            .map(clamp_feed_limit)
            .unwrap_or(state.feed_service.default_limit()),
        now: Utc::now(),
    };

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        render_section(ORG_AFFILIATIONS, &feed, &ctx),
    )
        .into_response())
}
