//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use catalog_core::error::{AppError, ErrorKind};

/// Message shown for every server-side failure.
const INTERNAL_MESSAGE: &str = "Unexpected error, check server logs";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// An [`AppError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status and error code for this error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self.0.kind {
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::DuplicateKey => (StatusCode::BAD_REQUEST, "DUPLICATE_KEY"),
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status();

        let message = if self.0.kind.is_client_facing() {
            self.0.message
        } else {
            tracing::error!(kind = %self.0.kind, error = %self.0.message, "Internal server error");
            INTERNAL_MESSAGE.to_string()
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::not_found("x"), StatusCode::NOT_FOUND),
            (AppError::duplicate_key("x"), StatusCode::BAD_REQUEST),
            (AppError::validation("x"), StatusCode::BAD_REQUEST),
            (AppError::forbidden("x"), StatusCode::FORBIDDEN),
            (AppError::database("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status().0, expected);
        }
    }

    #[tokio::test]
    async fn test_database_detail_not_rendered() {
        let err = AppError::database("password authentication failed for user \"catalog\"");
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ApiErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "INTERNAL_ERROR");
        assert_eq!(body.message, INTERNAL_MESSAGE);
        assert!(!body.message.contains("password authentication failed"));
    }

    #[tokio::test]
    async fn test_client_facing_message_rendered() {
        let err = AppError::not_found("Product with tee not found");
        let response = ApiError::from(err).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ApiErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "Product with tee not found");
    }
}
