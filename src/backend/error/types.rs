/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers.
 *
 * # Error Categories
 *
 * ## Request Errors
 *
 * Caused by the caller and answered with a 4xx status:
 * - Malformed request bodies
 * - Field validation failures
 * - Duplicate accounts
 *
 * ## Authentication Errors
 *
 * Rejected logins and anonymous access to protected routes. These are
 * ordinary user-facing responses, never process-level faults:
 * - Unknown email (404)
 * - Wrong password (401)
 * - Missing or invalid session (401)
 *
 * ## Dependency Errors
 *
 * Failures of the credential store, the password hasher, token signing or a
 * blocking task. They are logged and reported to the client as a generic
 * 500 without any internal detail.
 */

use thiserror::Error;
use axum::http::StatusCode;

/// Message returned to clients for every dependency failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// Each variant maps to exactly one HTTP status code via [`BackendError::status_code`].
///
/// # Usage
///
/// ```rust
/// use ticketdesk::backend::error::BackendError;
///
/// let err = BackendError::validation("email", "Invalid email format");
/// let err = BackendError::conflict("Email already registered");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. an unreadable request body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// A request field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The resource already exists
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Login for an email that has no account
    #[error("User doesn't exist")]
    UserNotFound,

    /// Login with a password that does not match the stored hash
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// A protected route was called without a valid session
    #[error("Authentication required")]
    Unauthorized,

    /// Credential store failure
    #[error("Store error: {0}")]
    StoreError(#[from] sqlx::Error),

    /// bcrypt failure (bad cost, corrupt stored hash)
    #[error("Password hashing error: {0}")]
    HashingError(#[from] bcrypt::BcryptError),

    /// Session token could not be signed
    #[error("Token signing error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// A blocking task panicked or was cancelled
    #[error("Background task error: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Whether this error comes from a failing dependency rather than the caller
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::StoreError(_) | Self::HashingError(_) | Self::TokenError(_) | Self::TaskError(_)
        )
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `ValidationError`, `Conflict` - 400 Bad Request
    /// - `UserNotFound` - 404 Not Found
    /// - `InvalidCredentials`, `Unauthorized` - 401 Unauthorized
    /// - dependency errors - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::ValidationError { .. } | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::StoreError(_) | Self::HashingError(_) | Self::TokenError(_) | Self::TaskError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message that is safe to show to the client
    ///
    /// Dependency errors collapse to [`INTERNAL_ERROR_MESSAGE`].
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::ValidationError { message, .. } => message.clone(),
            Self::Conflict { message } => message.clone(),
            Self::UserNotFound | Self::InvalidCredentials | Self::Unauthorized => self.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}
