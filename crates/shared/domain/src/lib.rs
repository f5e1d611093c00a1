//! Domain layer - Upstream payloads, the aggregated user view and the
//! transform between them.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Fetching and caching live in the gateway crate.

pub mod constants;
pub mod error;
pub mod upstream;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use upstream::{UpstreamProfile, UpstreamRepoSummary};
pub use user::{format_created_at, AggregatedUserView, RepoView};
