//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Validation-class errors (field violations, weak password, confirmation
//! mismatch) are produced and terminated by the credential gate itself and
//! carry structured data for the caller. Storage and transport errors
//! propagate.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::validation::Violation;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more field-level rule violations, aggregated
    #[error("Validation failed")]
    Validation(Vec<Violation>),

    /// Password strength score below the acceptance threshold
    #[error("Password is too weak. Try using uppercase, lowercase, numbers, and symbols.")]
    WeakPassword { warning: Option<&'static str> },

    /// Password and confirmation do not match
    #[error("Passwords do not match")]
    ConfirmationMismatch,

    /// Username already registered (storage uniqueness)
    #[error("Username already exists")]
    UsernameTaken,

    /// Email already registered (storage uniqueness)
    #[error("Email already exists")]
    EmailTaken,

    /// Uniform login failure; never reveals whether the email exists
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// User not found (credential updates only, never login)
    #[error("User not found")]
    UserNotFound,

    /// Verification email dispatch failed (template or transport)
    #[error("Verification email dispatch failed: {0}")]
    Dispatch(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) | AuthError::ConfirmationMismatch => StatusCode::BAD_REQUEST,
            AuthError::WeakPassword { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::UsernameTaken | AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Dispatch(_) => StatusCode::BAD_GATEWAY,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::ConfirmationMismatch => ErrorKind::BadRequest,
            AuthError::WeakPassword { .. } => ErrorKind::UnprocessableEntity,
            AuthError::UsernameTaken | AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Dispatch(_) => ErrorKind::BadGateway,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::WeakPassword {
                warning: Some(warning),
            } => err.with_action(*warning),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Dispatch(reason) => {
                tracing::error!(reason = %reason, "Verification email dispatch failed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::UsernameTaken | AuthError::EmailTaken => {
                tracing::debug!(error = %self, "Registration conflict");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();

        // Validation carries the full aggregated list so a caller can
        // report everything at once.
        if let AuthError::Validation(violations) = &self {
            let body = serde_json::json!({ "errors": violations });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }

        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
