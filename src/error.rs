// =============================================================================
// ERROR MODULE
// =============================================================================
// This module defines custom error types and their HTTP responses.
//
// The error taxonomy is intentionally shallow: an unknown product id is a
// not-found outcome callers must check for, malformed client input is a bad
// request, and anything else is an internal error with the detail kept out
// of the response body.
// =============================================================================

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// =============================================================================
// CUSTOM ERROR TYPE
// =============================================================================
#[derive(Debug, Error)]
pub enum AppError {
    /// Lookup by an identity the catalog does not contain
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data (unknown category, password mismatch, ...)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

// =============================================================================
// HTTP RESPONSE CONVERSION
// =============================================================================
// Implementing IntoResponse lets handlers return AppError directly; axum
// converts it into the standardized error body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),

            // Internal detail stays in the logs, not in the response
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        tracing::error!(
            error_code = error_code,
            message = %self,
            "Request failed"
        );

        let body = ErrorResponse::new(error_code, message);

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================
// A convenient type alias for Results that use our error type.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("Product not found: 999".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("Unknown category".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let response = AppError::Internal("lock poisoned at store.rs:42".to_string());
        let http = response.into_response();
        assert_eq!(http.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
