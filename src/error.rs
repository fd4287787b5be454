//! Error types for Libris server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable application error codes exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    BadValue = 2,
    Duplicate = 3,
    NoSuchBook = 4,
    NoSuchRecord = 5,
    UpstreamFailure = 6,
    UpstreamTimeout = 7,
    StorageFailure = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("A book with ISBN {0} already exists")]
    DuplicateIdentifier(String),

    #[error("No bibliographic record found for ISBN {0}")]
    RecordNotFound(String),

    #[error("Bibliographic service request timed out")]
    UpstreamTimeout,

    #[error("Bibliographic service unreachable: {0}")]
    UpstreamUnavailable(String),

    #[error("Bibliographic service returned status {0}")]
    Upstream(u16),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to persist catalog: {0}")]
    Persistence(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidIdentifier(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, self.to_string())
            }
            AppError::Validation(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, self.to_string())
            }
            AppError::DuplicateIdentifier(_) => {
                (StatusCode::CONFLICT, ErrorCode::Duplicate, self.to_string())
            }
            AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchBook, self.to_string())
            }
            AppError::RecordNotFound(_) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchRecord, self.to_string())
            }
            AppError::UpstreamTimeout => {
                (StatusCode::GATEWAY_TIMEOUT, ErrorCode::UpstreamTimeout, self.to_string())
            }
            AppError::UpstreamUnavailable(_) | AppError::Upstream(_) => {
                (StatusCode::BAD_GATEWAY, ErrorCode::UpstreamFailure, self.to_string())
            }
            AppError::Persistence(msg) => {
                // Memory and disk have diverged; this must reach the caller.
                tracing::error!("Persistence error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::StorageFailure, self.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
