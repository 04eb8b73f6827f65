//! GitHub adapter
//!
//! Implementation of the GitHub search client.

pub mod client;

pub use client::GitHubClientImpl;
