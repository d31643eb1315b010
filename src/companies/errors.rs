//! # Company Errors
//!
//! Error taxonomy for the companies resource and its translation into
//! HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for company operations
pub type CompanyResult<T> = Result<T, CompanyError>;

/// Company resource errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompanyError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body absent or not decodable
    #[error("{0}")]
    BadRequest(String),

    /// No row matches the given code
    #[error("{0}")]
    NotFound(String),

    /// Unique constraint violated (duplicate code or name)
    #[error("Company already exists: {0}")]
    Conflict(String),

    /// Any other integrity constraint violated (NOT NULL, CHECK, ...)
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Route exists but not for this method
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Connection or query execution failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CompanyError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CompanyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CompanyError::Constraint(_) => StatusCode::BAD_REQUEST,
            CompanyError::NotFound(_) => StatusCode::NOT_FOUND,
            CompanyError::Conflict(_) => StatusCode::CONFLICT,
            CompanyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            CompanyError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to a client.
    ///
    /// Driver text (constraint names, connection details) stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            CompanyError::Conflict(_) => "Company already exists.".to_string(),
            CompanyError::Storage(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for CompanyError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => match db.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    CompanyError::Conflict(db.message().to_string())
                }
                sqlx::error::ErrorKind::NotNullViolation
                | sqlx::error::ErrorKind::CheckViolation
                | sqlx::error::ErrorKind::ForeignKeyViolation => {
                    CompanyError::Constraint(db.message().to_string())
                }
                _ => CompanyError::Storage(db.to_string()),
            },
            other => CompanyError::Storage(other.to_string()),
        }
    }
}

/// Error detail nested under `error`
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

/// Error response body: `{"error": {"message": ..., "status": ...}}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

impl From<&CompanyError> for ErrorResponse {
    fn from(err: &CompanyError) -> Self {
        Self {
            error: ErrorDetail {
                message: err.public_message(),
                status: err.status_code().as_u16(),
            },
        }
    }
}

impl IntoResponse for CompanyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
