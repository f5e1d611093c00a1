//! Aggregated user view and the transform that builds it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::RFC_1123_FORMAT;
use crate::error::{DomainError, DomainResult};
use crate::upstream::{UpstreamProfile, UpstreamRepoSummary};

/// Repository projection returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RepoView {
    /// Repository short name
    #[cfg_attr(feature = "openapi", schema(example = "hello-world"))]
    pub name: Option<String>,
    /// Link to the repository (absent when upstream has no full name)
    #[cfg_attr(
        feature = "openapi",
        schema(example = "https://api.github.com/repos/octocat/hello-world")
    )]
    pub url: Option<String>,
}

impl RepoView {
    /// Project an upstream repository, linking it under `repo_url_base`.
    pub fn from_summary(summary: UpstreamRepoSummary, repo_url_base: &str) -> Self {
        Self {
            name: summary.name,
            url: summary
                .full_name
                .map(|full_name| format!("{}{}", repo_url_base, full_name)),
        }
    }
}

/// Flattened user profile plus repositories (safe to return to client).
///
/// Field order is part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AggregatedUserView {
    /// Upstream login
    #[cfg_attr(feature = "openapi", schema(example = "octocat"))]
    pub user_name: Option<String>,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "The Octocat"))]
    pub display_name: Option<String>,
    /// Avatar URL
    pub avatar: Option<String>,
    /// Free-text location
    #[cfg_attr(feature = "openapi", schema(example = "San Francisco"))]
    pub geo_location: Option<String>,
    /// Public email
    pub email: Option<String>,
    /// Profile URL
    pub url: Option<String>,
    /// Account creation time in RFC 1123 form
    #[cfg_attr(feature = "openapi", schema(example = "Wed, 01 Jan 2020 00:00:00 GMT"))]
    pub created_at: Option<String>,
    /// Owned repositories, in upstream order
    pub repos: Vec<RepoView>,
}

impl AggregatedUserView {
    /// Merge a profile and its repository list.
    ///
    /// Absent repository entries are dropped. Fails only when the profile
    /// creation timestamp is present but unparseable.
    pub fn assemble(
        profile: UpstreamProfile,
        repos: Vec<Option<UpstreamRepoSummary>>,
        repo_url_base: &str,
    ) -> DomainResult<Self> {
        let created_at = profile
            .created_at
            .as_deref()
            .map(format_created_at)
            .transpose()?;

        let repos = repos
            .into_iter()
            .flatten()
            .map(|summary| RepoView::from_summary(summary, repo_url_base))
            .collect();

        Ok(Self {
            user_name: profile.login,
            display_name: profile.name,
            avatar: profile.avatar_url,
            geo_location: profile.location,
            email: profile.email,
            url: profile.url,
            created_at,
            repos,
        })
    }
}

/// Reformat an ISO-8601 timestamp as an RFC 1123 date in UTC.
///
/// `2020-01-01T00:00:00Z` becomes `Wed, 01 Jan 2020 00:00:00 GMT`.
pub fn format_created_at(raw: &str) -> DomainResult<String> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| DomainError::transform(format!("Invalid created_at '{}': {}", raw, e)))?;

    Ok(parsed
        .with_timezone(&Utc)
        .format(RFC_1123_FORMAT)
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPO_BASE: &str = "https://api.github.com/repos/";

    fn profile() -> UpstreamProfile {
        UpstreamProfile {
            login: Some("octocat".to_string()),
            name: Some("The Octocat".to_string()),
            avatar_url: Some("https://avatars.example/octo.png".to_string()),
            location: Some("Internet".to_string()),
            email: Some("octo@example.com".to_string()),
            url: Some("https://api.github.com/users/octocat".to_string()),
            created_at: Some("2020-01-01T00:00:00Z".to_string()),
        }
    }

    fn repo(name: &str, full_name: Option<&str>) -> Option<UpstreamRepoSummary> {
        Some(UpstreamRepoSummary {
            name: Some(name.to_string()),
            full_name: full_name.map(str::to_string),
        })
    }

    #[test]
    fn test_format_created_at() {
        assert_eq!(
            format_created_at("2020-01-01T00:00:00Z").unwrap(),
            "Wed, 01 Jan 2020 00:00:00 GMT"
        );
    }

    #[test]
    fn test_format_created_at_converts_offset_to_utc() {
        assert_eq!(
            format_created_at("2011-01-25T23:44:36+02:00").unwrap(),
            "Tue, 25 Jan 2011 21:44:36 GMT"
        );
    }

    #[test]
    fn test_format_created_at_rejects_garbage() {
        let err = format_created_at("yesterday").unwrap_err();
        assert!(matches!(err, DomainError::Transform(_)));
    }

    #[test]
    fn test_assemble_maps_profile_fields() {
        let view = AggregatedUserView::assemble(profile(), vec![], REPO_BASE).unwrap();

        assert_eq!(view.user_name.as_deref(), Some("octocat"));
        assert_eq!(view.display_name.as_deref(), Some("The Octocat"));
        assert_eq!(view.avatar.as_deref(), Some("https://avatars.example/octo.png"));
        assert_eq!(view.geo_location.as_deref(), Some("Internet"));
        assert_eq!(view.email.as_deref(), Some("octo@example.com"));
        assert_eq!(view.url.as_deref(), Some("https://api.github.com/users/octocat"));
        assert_eq!(view.created_at.as_deref(), Some("Wed, 01 Jan 2020 00:00:00 GMT"));
        assert!(view.repos.is_empty());
    }

    #[test]
    fn test_assemble_keeps_repo_order_and_links() {
        let repos = vec![
            repo("repo-one", Some("octocat/repo-one")),
            repo("repo-two", Some("octocat/repo-two")),
        ];

        let view = AggregatedUserView::assemble(profile(), repos, REPO_BASE).unwrap();

        assert_eq!(view.repos.len(), 2);
        assert_eq!(view.repos[0].name.as_deref(), Some("repo-one"));
        assert_eq!(
            view.repos[0].url.as_deref(),
            Some("https://api.github.com/repos/octocat/repo-one")
        );
        assert_eq!(view.repos[1].name.as_deref(), Some("repo-two"));
    }

    #[test]
    fn test_assemble_drops_absent_repos() {
        let repos = vec![None, repo("kept", Some("octocat/kept")), None];

        let view = AggregatedUserView::assemble(profile(), repos, REPO_BASE).unwrap();

        assert_eq!(view.repos.len(), 1);
        assert_eq!(view.repos[0].name.as_deref(), Some("kept"));
    }

    #[test]
    fn test_assemble_repo_without_full_name_has_no_url() {
        let view =
            AggregatedUserView::assemble(profile(), vec![repo("bare", None)], REPO_BASE).unwrap();

        assert_eq!(view.repos[0].name.as_deref(), Some("bare"));
        assert!(view.repos[0].url.is_none());
    }

    #[test]
    fn test_assemble_without_created_at() {
        let profile = UpstreamProfile {
            created_at: None,
            ..profile()
        };

        let view = AggregatedUserView::assemble(profile, vec![], REPO_BASE).unwrap();
        assert!(view.created_at.is_none());
    }

    #[test]
    fn test_assemble_propagates_bad_timestamp() {
        let profile = UpstreamProfile {
            created_at: Some("not-a-date".to_string()),
            ..profile()
        };

        let result = AggregatedUserView::assemble(profile, vec![], REPO_BASE);
        assert!(matches!(result, Err(DomainError::Transform(_))));
    }

    #[test]
    fn test_view_serializes_fields_in_wire_order() {
        let view = AggregatedUserView::assemble(
            UpstreamProfile::default(),
            vec![repo("r", Some("o/r"))],
            REPO_BASE,
        )
        .unwrap();

        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"user_name":null,"display_name":null,"avatar":null,"geo_location":null,"#,
                r#""email":null,"url":null,"created_at":null,"#,
                r#""repos":[{"name":"r","url":"https://api.github.com/repos/o/r"}]}"#
            )
        );
    }
}
