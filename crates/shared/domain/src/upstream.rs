//! Payloads returned by the upstream source-hosting API.
//!
//! Every field is optional: the upstream is free to send `null` or omit
//! anything, and unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// User profile from `GET {base}/{username}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamProfile {
    pub login: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    /// ISO-8601 creation timestamp, e.g. `2020-01-01T00:00:00Z`
    pub created_at: Option<String>,
}

/// One entry of `GET {base}/{username}/repos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamRepoSummary {
    pub name: Option<String>,
    /// `owner/repo`
    pub full_name: Option<String>,
}
