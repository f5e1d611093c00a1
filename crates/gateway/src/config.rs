//! Gateway configuration.

use std::env;
use std::str::FromStr;

use common::{CacheConfig, ServiceConfig, UpstreamConfig};

/// Gateway configuration.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Bind address and service name
    pub service: ServiceConfig,
    /// Upstream user API
    pub upstream: UpstreamConfig,
    /// User view cache
    pub cache: CacheConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the process environment only; `main` loads `.env` beforehand.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                host: env::var("GATEWAY_HOST").unwrap_or(defaults.service.host),
                port: env_parse("GATEWAY_PORT").unwrap_or(defaults.service.port),
            },
            upstream: UpstreamConfig {
                user_api_url: env::var("UPSTREAM_USER_API_URL")
                    .unwrap_or(defaults.upstream.user_api_url),
                repo_url_base: env::var("UPSTREAM_REPO_URL_BASE")
                    .unwrap_or(defaults.upstream.repo_url_base),
                token: env::var("UPSTREAM_TOKEN").ok().filter(|t| !t.is_empty()),
                timeout_seconds: env_parse("UPSTREAM_TIMEOUT_SECONDS")
                    .unwrap_or(defaults.upstream.timeout_seconds),
            },
            cache: CacheConfig {
                ttl_seconds: env_parse("USER_CACHE_TTL_SECONDS")
                    .unwrap_or(defaults.cache.ttl_seconds),
                max_capacity: env_parse("USER_CACHE_MAX_CAPACITY")
                    .unwrap_or(defaults.cache.max_capacity),
            },
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.service.host, self.service.port)
    }
}

/// Read and parse an environment variable, ignoring unparsable values.
fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();

        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.upstream.user_api_url, "https://api.github.com/users");
        assert_eq!(config.upstream.repo_url_base, "https://api.github.com/repos/");
        assert_eq!(config.cache.ttl_seconds, 600);
    }

    #[test]
    fn test_env_parse_ignores_missing_keys() {
        assert_eq!(env_parse::<u16>("USER_GATEWAY_TEST_UNSET_KEY"), None);
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        env::set_var("USER_CACHE_MAX_CAPACITY", "42");
        env::set_var("UPSTREAM_TOKEN", "");

        let config = GatewayConfig::from_env();

        assert_eq!(config.cache.max_capacity, 42);
        assert!(config.upstream.token.is_none());

        env::remove_var("USER_CACHE_MAX_CAPACITY");
        env::remove_var("UPSTREAM_TOKEN");
    }
}
