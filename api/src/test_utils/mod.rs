//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - mockall has lifetime issues with traits containing `&str` parameters
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//!
//! Adapter and router tests talk to `fake_github`, a real localhost server,
//! so the reqwest paths (timeouts, status handling) run for real.

pub mod fake_github;
pub mod fixtures;
pub mod mocks;

pub use fake_github::*;
pub use fixtures::*;
pub use mocks::*;
