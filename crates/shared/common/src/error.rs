//! Unified error handling for HTTP.
//!
//! Provides a single error type that renders as an Axum HTTP response with a
//! stable JSON body. Upstream details are logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("No user found")]
    NotFound,

    #[error("No user data found for: {0}")]
    NoContent(String),

    // Validation
    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[error("Error getting user data")]
    Upstream(String),

    #[error("Unexpected upstream data")]
    Transform(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::NoContent(_) => "NO_CONTENT",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Transform(_) => "TRANSFORM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::NoContent(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Transform(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::BadRequest(msg) => msg.clone(),

            // Hide details for upstream/internal errors
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
                "Error getting user data".to_string()
            }
            AppError::Transform(msg) => {
                tracing::error!("Transform error: {}", msg);
                "Unexpected data received from upstream".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(_) => AppError::NotFound,
            DomainError::NoContent(username) => AppError::NoContent(username),
            DomainError::Upstream(msg) => AppError::Upstream(msg),
            DomainError::Transform(msg) => AppError::Transform(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
