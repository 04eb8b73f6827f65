//! Application layer
//!
//! Contains the feed use case: a one-shot loader, the mount that owns its
//! state, and the service that configures both.

pub mod feed_loader;
pub mod feed_mount;
pub mod feed_service;

pub use feed_loader::FeedState;
pub use feed_service::FeedService;
