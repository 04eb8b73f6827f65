//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for contributions and affiliations
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
