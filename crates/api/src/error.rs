//! Unified error handling for the API.
//!
//! Provides a single `ApiError` type; all route handlers return
//! `Result<T, ApiError>`, and `IntoResponse` is the one place HTTP status
//! codes are assigned. Every failure body is `{"error": "<message>"}`.
//!
//! Server-side failures (storage, hashing) respond with 500 and echo the
//! raw error message. No secret-bearing error path exists in this service;
//! the echo is a known hardening gap, kept deliberately.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::AuthError;
use crate::storage::StorageError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The request body is not valid JSON.
    #[error("Invalid JSON data")]
    MalformedJson,

    /// Resource (or route) not found.
    #[error("{0}")]
    NotFound(String),

    /// Authentication operation failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Storage operation failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Anything else unanticipated.
    #[error("{0}")]
    Internal(String),
}

/// JSON failure body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::MalformedJson => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::InvalidEmail(_)
                | AuthError::UserAlreadyExists
                | AuthError::WeakPassword(_) => StatusCode::BAD_REQUEST,
                AuthError::PasswordHash | AuthError::Storage(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
