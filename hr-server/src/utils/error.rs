//! Unified error handling
//!
//! [`AppError`] is the application-level error type returned by handlers and
//! services. Every variant maps to an HTTP status and a `{"detail": ...}`
//! JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed identifier in a path, query or body field (400)
    #[error("{0}")]
    InvalidId(String),

    /// Request payload failed a field-level check (400)
    #[error("{0}")]
    Validation(String),

    /// Target entity of the operation does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// A referenced entity does not exist (404)
    #[error("{0}")]
    ReferenceNotFound(String),

    /// Uniqueness conflict (409)
    #[error("{0}")]
    Conflict(String),

    /// Storage-level failure (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Unexpected internal failure (500)
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error body shape shared by every failure response
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::InvalidId(msg) | AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, msg)
            }

            AppError::NotFound(msg) | AppError::ReferenceNotFound(msg) => {
                (StatusCode::NOT_FOUND, msg)
            }

            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }

            AppError::Internal(err) => {
                error!(target: "internal", error = %err, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    /// Malformed id string
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId(format!("Invalid id: {}", id.into()))
    }

    /// Field-level validation failure
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Operation target missing
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(format!("{} not found", resource.into()))
    }

    /// Referenced entity missing
    pub fn reference_not_found(resource: impl Into<String>) -> Self {
        Self::ReferenceNotFound(format!("{} not found", resource.into()))
    }

    /// Uniqueness conflict
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Storage failure
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Unexpected failure
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(anyhow::Error::msg(msg.into()))
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::InvalidId(msg) => AppError::InvalidId(msg),
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
