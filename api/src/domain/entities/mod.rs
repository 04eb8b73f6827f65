//! Domain entities
//!
//! Core business objects derived from the GitHub search results.

pub mod contribution;
pub mod org;

pub use contribution::{parse_repository, sequence_number, ContributionItem, ItemStatus};
pub use org::{OrgAffiliation, ORG_AFFILIATIONS};
