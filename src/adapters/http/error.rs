//! API error type shared by every resource router.
//!
//! Domain error codes are mapped to HTTP statuses here and nowhere else.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError.to_string(), INTERNAL_MESSAGE)
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed path or query input caught before reaching a handler.
    BadRequest(String),
    Domain(DomainError),
}

impl ApiError {
    pub fn invalid_id(resource: &str) -> Self {
        ApiError::BadRequest(format!("Invalid {} ID", resource))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(err) => status_for(err.code),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::RibbonNotFound | ErrorCode::BowNotFound | ErrorCode::RecipeNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::VersionConflict => StatusCode::CONFLICT,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(msg) => ErrorResponse::bad_request(msg),
            ApiError::Domain(err) if status.is_server_error() => {
                tracing::error!(code = %err.code, error = %err.message, "request failed");
                ErrorResponse::internal()
            }
            ApiError::Domain(err) => ErrorResponse {
                error: err.message,
                code: err.code.to_string(),
                details: err.details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::invalid_id("bow").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_codes_map_to_404() {
        for code in [
            ErrorCode::RibbonNotFound,
            ErrorCode::BowNotFound,
            ErrorCode::RecipeNotFound,
        ] {
            assert_eq!(status_for(code), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn validation_maps_to_400() {
        let err: ApiError = DomainError::validation("name", "Name is required").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn version_conflict_maps_to_409() {
        let err: ApiError = DomainError::version_conflict("Bow", 1, 2).into();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn database_error_maps_to_500() {
        let err: ApiError = DomainError::database("Failed to save bow", "pool timed out").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn client_error_body_carries_code_and_message() {
        let err: ApiError =
            DomainError::new(ErrorCode::RibbonNotFound, "Ribbon abc not found").into();
        let body = body_of(err.into_response()).await;

        assert_eq!(body.code, "RIBBON_NOT_FOUND");
        assert_eq!(body.error, "Ribbon abc not found");
    }

    #[tokio::test]
    async fn server_error_body_hides_cause() {
        let err: ApiError =
            DomainError::database("Failed to list ribbons", "password authentication failed")
                .into();
        let body = body_of(err.into_response()).await;

        assert_eq!(body.code, "INTERNAL_ERROR");
        assert_eq!(body.error, INTERNAL_MESSAGE);
        assert!(body.details.is_empty());
    }
}
