//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod contributions;
pub mod orgs;

pub use contributions::get_contributions;
pub use orgs::list_orgs;

use crate::error::AppError;
use axum::http::Uri;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
