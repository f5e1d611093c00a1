//! User detail service - Aggregates upstream profile and repositories.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use domain::{AggregatedUserView, DomainError, DomainResult};

use crate::cache::UserCache;
use crate::clients::UpstreamClient;

/// User detail service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserDetailService: Send + Sync {
    /// Get the aggregated view for `username`, served from cache when fresh.
    async fn get_user_detail(&self, username: &str) -> DomainResult<AggregatedUserView>;
}

/// Concrete implementation backed by an upstream client and a TTL cache.
pub struct UserDetailAggregator<C: UpstreamClient> {
    client: Arc<C>,
    cache: UserCache,
    repo_url_base: String,
}

impl<C: UpstreamClient> UserDetailAggregator<C> {
    /// Create new service instance
    pub fn new(client: Arc<C>, cache: UserCache, repo_url_base: impl Into<String>) -> Self {
        Self {
            client,
            cache,
            repo_url_base: repo_url_base.into(),
        }
    }

    /// Profile first, then repositories; the profile is mandatory.
    async fn fetch_user_detail(&self, username: &str) -> DomainResult<AggregatedUserView> {
        info!("Making upstream call for user data: {}", username);

        let profile = self
            .client
            .fetch_profile(username)
            .await
            .map_err(|e| e.into_domain(username))?
            .ok_or_else(|| DomainError::no_content(username))?;

        let repos = self
            .client
            .fetch_repos(username)
            .await
            .map_err(|e| e.into_domain(username))?
            .unwrap_or_default();

        if repos.is_empty() {
            warn!("No user repo data found for: {}", username);
        }

        AggregatedUserView::assemble(profile, repos, &self.repo_url_base)
    }
}

#[async_trait]
impl<C: UpstreamClient> UserDetailService for UserDetailAggregator<C> {
    async fn get_user_detail(&self, username: &str) -> DomainResult<AggregatedUserView> {
        self.cache
            .get_or_try_insert_with(username, self.fetch_user_detail(username))
            .await
    }
}
