//! In-memory user view cache.
//!
//! Uses `moka` for TTL-based concurrent caching. Entries are written only
//! after a view was built successfully and are never refreshed in place.

use std::future::Future;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use common::CacheConfig;
use domain::{AggregatedUserView, DomainResult, USER_CACHE_NAME};

/// Cache of aggregated user views keyed by exact username.
#[derive(Clone)]
pub struct UserCache {
    inner: Cache<String, AggregatedUserView>,
}

impl UserCache {
    /// Create a cache from configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_ttl(Duration::from_secs(config.ttl_seconds), config.max_capacity)
    }

    /// Create with custom TTL.
    pub fn with_ttl(ttl: Duration, max_capacity: u64) -> Self {
        let inner = Cache::builder()
            .name(USER_CACHE_NAME)
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self { inner }
    }

    /// Get a cached view without computing it.
    #[cfg(test)]
    async fn get(&self, username: &str) -> Option<AggregatedUserView> {
        self.inner.get(username).await
    }

    /// Return the cached view, or run `init` and cache its result.
    ///
    /// Concurrent callers for the same cold key share a single `init`.
    /// Errors are handed to every waiter and nothing is stored.
    pub async fn get_or_try_insert_with<F>(
        &self,
        username: &str,
        init: F,
    ) -> DomainResult<AggregatedUserView>
    where
        F: Future<Output = DomainResult<AggregatedUserView>>,
    {
        let entry = self
            .inner
            .entry_by_ref(username)
            .or_try_insert_with(init)
            .await
            .map_err(|e| (*e).clone())?;

        if entry.is_fresh() {
            debug!("{} miss for {}, stored", USER_CACHE_NAME, username);
        } else {
            debug!("{} hit for {}", USER_CACHE_NAME, username);
        }

        Ok(entry.into_value())
    }

    /// Approximate number of live entries.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Flush pending maintenance so `entry_count` is up to date.
    pub async fn run_pending_tasks(&self) {
        self.inner.run_pending_tasks().await;
    }
}
