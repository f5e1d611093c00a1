//! Validated path extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;

/// Path extractor that automatically validates the parameters.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract path parameters
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        // Validate
        value.validate().map_err(|e| {
            // Get first validation error message
            let message = e
                .field_errors()
                .values()
                .next()
                .and_then(|errors| errors.first())
                .and_then(|error| error.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| "Validation failed".to_string());
            AppError::bad_request(message)
        })?;

        Ok(ValidatedPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct CodePath {
        #[validate(length(min = 3, message = "Code must be at least 3 characters"))]
        code: String,
    }

    async fn echo(ValidatedPath(path): ValidatedPath<CodePath>) -> String {
        path.code
    }

    async fn call(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = Router::new().route("/:code", get(echo));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_valid_path_is_passed_through() {
        let (status, _) = call("/abcd").await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rule_violation_is_bad_request() {
        let (status, body) = call("/ab").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(body["error"]["message"], "Code must be at least 3 characters");
    }
}
