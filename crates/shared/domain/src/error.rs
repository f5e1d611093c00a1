//! Domain-level errors.
//!
//! These errors describe why a user view could not be produced. They are
//! independent of infrastructure concerns (HTTP status codes, reqwest).

use thiserror::Error;

/// Domain-specific errors raised while building a user view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Upstream reports the user does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream answered successfully but without any profile data
    #[error("No user data found for: {0}")]
    NoContent(String),

    /// Any other upstream failure (status, transport, rate limiting)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Upstream data did not have the expected shape
    #[error("Transform error: {0}")]
    Transform(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }

    /// Create a no content error
    pub fn no_content(username: impl Into<String>) -> Self {
        DomainError::NoContent(username.into())
    }

    /// Create an upstream error
    pub fn upstream(msg: impl Into<String>) -> Self {
        DomainError::Upstream(msg.into())
    }

    /// Create a transform error
    pub fn transform(msg: impl Into<String>) -> Self {
        DomainError::Transform(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
