//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints, the
//! single classification shared by every handler. It implements
//! `axum::response::IntoResponse` to produce JSON error responses with
//! appropriate HTTP status codes.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use todos_storage::StorageError;

/// API errors with HTTP status code mapping.
///
/// Each variant maps to a specific HTTP status code and a JSON error body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing request body (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Field validation failed (400), with per-field messages.
    #[error("validation failed")]
    Validation(BTreeMap<String, Vec<String>>),

    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Storage or other internal fault (500).
    ///
    /// The detail is logged; the response body carries only a generic
    /// message so internal state never leaks to callers.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "message": message }),
            ),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "errors": errors }),
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "message": message }),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "message": "Internal server error" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        // Every storage fault is unrecoverable at this layer; absence is
        // modelled as Option/bool in the store contract, not as an error.
        ApiError::Internal(err.to_string())
    }
}

impl ApiError {
    /// Builds the not-found error for a todo ID, shared by the read and
    /// update paths.
    pub fn todo_not_found(id: i64) -> Self {
        ApiError::NotFound(format!("Todo item with ID {id} not found."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_the_error_taxonomy() {
        assert_eq!(
            ApiError::BadRequest("nope".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation(BTreeMap::new()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::todo_not_found(9).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("db gone".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_includes_the_id() {
        let err = ApiError::todo_not_found(999);
        assert_eq!(
            err.to_string(),
            "not found: Todo item with ID 999 not found."
        );
    }
}
