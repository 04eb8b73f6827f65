//! Feed module
//!
//! HTML rendering of the contribution feed section.

pub mod relative_time;
pub mod renderer;

pub use renderer::{render_section, FeedContext};
