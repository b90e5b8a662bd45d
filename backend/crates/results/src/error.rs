//! Result Store Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Result alias for result-store operations
pub type ResultResult<T> = Result<T, ResultError>;

/// Result-store error variants
#[derive(Debug, Error)]
pub enum ResultError {
    /// A request field failed validation
    #[error("Invalid value for '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// Anti-forgery token missing or mismatched
    #[error("Anti-forgery token validation failed")]
    CsrfRejected,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ResultError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ResultError::Validation { .. } => StatusCode::BAD_REQUEST,
            ResultError::CsrfRejected => StatusCode::FORBIDDEN,
            ResultError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ResultError::Validation { .. } => ErrorKind::BadRequest,
            ResultError::CsrfRejected => ErrorKind::Forbidden,
            ResultError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to the kernel error for the HTTP body
    ///
    /// Database details never reach the client.
    pub fn to_app_error(&self) -> AppError {
        match self {
            ResultError::Database(e) => {
                tracing::error!(error = %e, "Result store database error");
                AppError::internal("An internal error occurred")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for ResultError {
    fn into_response(self) -> Response {
        self.to_app_error().into_response()
    }
}
