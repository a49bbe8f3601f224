//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The candidate password was absent from the request.
    /// Answers exactly like a failed validation (400 `false`).
    #[error("Password is missing")]
    MissingInput,

    #[error("Password exceeds {max} characters")]
    InputTooLarge { max: usize },

    #[error("Internal server error")]
    Internal(String),

    // Process-level failures (binding, serving)
    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingInput => StatusCode::BAD_REQUEST,
            AppError::InputTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::MissingInput => (status, Json(false)).into_response(),
            AppError::InputTooLarge { max } => {
                tracing::debug!(max, "Rejected oversized password");
                status.into_response()
            }
            // Hide details for internal errors
            AppError::Internal(msg) | AppError::Server(msg) => {
                tracing::error!("Internal error: {}", msg);
                status.into_response()
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn server(msg: impl Into<String>) -> Self {
        AppError::Server(msg.into())
    }
}
