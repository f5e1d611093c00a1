//! Shared configuration structures.

use serde::{Deserialize, Serialize};

use domain::{
    DEFAULT_REPO_URL_BASE, DEFAULT_USER_API_URL, DEFAULT_USER_CACHE_MAX_CAPACITY,
    DEFAULT_USER_CACHE_TTL_SECONDS,
};

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "user-gateway".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// In-memory cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    pub ttl_seconds: u64,
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_USER_CACHE_TTL_SECONDS,
            max_capacity: DEFAULT_USER_CACHE_MAX_CAPACITY,
        }
    }
}

/// Upstream API configuration.
#[derive(Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base for `{base}/{username}` and `{base}/{username}/repos`
    pub user_api_url: String,
    /// Prefix for repository links, concatenated with `full_name`
    pub repo_url_base: String,
    /// Optional bearer token
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("user_api_url", &self.user_api_url)
            .field("repo_url_base", &self.repo_url_base)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            user_api_url: DEFAULT_USER_API_URL.to_string(),
            repo_url_base: DEFAULT_REPO_URL_BASE.to_string(),
            token: None,
            timeout_seconds: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_config_debug_redacts_token() {
        let config = UpstreamConfig {
            token: Some("ghp_secret".to_string()),
            ..Default::default()
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_cache_config_defaults_to_ten_minutes() {
        assert_eq!(CacheConfig::default().ttl_seconds, 600);
    }
}
