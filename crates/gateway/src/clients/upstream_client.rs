//! HTTP client for the upstream user API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use common::UpstreamConfig;
use domain::{DomainError, UpstreamProfile, UpstreamRepoSummary, REPOS_PATH_SEGMENT};

/// User agent sent with every upstream request
const USER_AGENT: &str = concat!("user-gateway/", env!("CARGO_PKG_VERSION"));

/// Media type requested from the upstream API
const ACCEPT_JSON: &str = "application/vnd.github+json";

/// Failure talking to the upstream API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("upstream resource not found")]
    NotFound,

    #[error("upstream responded with status {0}")]
    Status(u16),

    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("unexpected upstream payload: {0}")]
    Decode(String),

    #[error("invalid upstream configuration: {0}")]
    Config(String),
}

impl UpstreamError {
    /// Translate into the domain taxonomy. Only "not found" keeps its identity;
    /// shape problems become transform errors and everything else is upstream.
    pub fn into_domain(self, username: &str) -> DomainError {
        info!("Error getting user data for: {}: {}", username, self);
        match self {
            UpstreamError::NotFound => DomainError::not_found(username),
            UpstreamError::Decode(msg) => DomainError::transform(msg),
            other => DomainError::upstream(other.to_string()),
        }
    }
}

/// Lookups against the upstream API.
///
/// `Ok(None)` means the call succeeded but the body carried no data.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// `GET {base}/{username}`
    async fn fetch_profile(&self, username: &str)
        -> Result<Option<UpstreamProfile>, UpstreamError>;

    /// `GET {base}/{username}/repos`
    async fn fetch_repos(
        &self,
        username: &str,
    ) -> Result<Option<Vec<Option<UpstreamRepoSummary>>>, UpstreamError>;
}

/// reqwest implementation of [`UpstreamClient`].
pub struct HttpUpstreamClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpUpstreamClient {
    /// Build a client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(&config.user_api_url)
            .map_err(|e| UpstreamError::Config(format!("{}: {}", config.user_api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::Config(format!(
                "{} cannot be used as a base URL",
                config.user_api_url
            )));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT_JSON));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| UpstreamError::Config(e.to_string()))?;

        debug!("Upstream user API at {}", base_url);

        Ok(Self {
            http,
            base_url,
            token: config.token.clone(),
        })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::Config(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, UpstreamError> {
        debug!("GET {}", url);

        let mut request = self.http.get(url.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Upstream error ({}) for {}", status, url);
            debug!("Upstream error body: {}", body);
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice::<Option<T>>(&bytes).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn fetch_profile(
        &self,
        username: &str,
    ) -> Result<Option<UpstreamProfile>, UpstreamError> {
        let url = self.endpoint(&[username])?;
        self.get_json(url).await
    }

    async fn fetch_repos(
        &self,
        username: &str,
    ) -> Result<Option<Vec<Option<UpstreamRepoSummary>>>, UpstreamError> {
        let url = self.endpoint(&[username, REPOS_PATH_SEGMENT])?;
        self.get_json(url).await
    }
}
