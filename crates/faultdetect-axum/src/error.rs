//! Axum-specific error types and mappings.
//!
//! This module provides the adapter's error type and the mapping from
//! `FaultRepositoryError` to HTTP status codes and response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use faultdetect_core::FaultRepositoryError;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body: `{"error": <message>}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}

impl From<FaultRepositoryError> for HttpError {
    fn from(err: FaultRepositoryError) -> Self {
        match err {
            FaultRepositoryError::InvalidId(msg) => Self::BadRequest(msg),
            FaultRepositoryError::NotFound(msg) => Self::NotFound(msg),
            FaultRepositoryError::Storage(msg) => Self::Internal(msg),
        }
    }
}
