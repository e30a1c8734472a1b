/**
 * Backend Error Types
 *
 * This module defines the error type returned by handlers and by the auth
 * and campaign store functions they call.
 *
 * # Error Categories
 *
 * ## Caller Errors
 *
 * - `Validation` - Missing or inconsistent form fields
 * - `DuplicateEmail` - Signup for an email that is already registered
 * - `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
 * - `HandlerError` - Any other request problem with an explicit status
 *
 * ## Server Errors
 *
 * - `Database` - The store could not be reached or rejected a statement
 * - `PasswordHash` - bcrypt failed to produce a digest
 * - `SessionToken` - The session token could not be signed
 *
 * Server errors are fatal for the request: they are logged and reported as
 * 500 without details.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Generic message for every credential failure
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

/// Message for a signup with an already registered email
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already registered. Please use a different email.";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use dragonblock::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::validation("password", "Passwords do not match.");
/// assert_eq!(err.message(), "Passwords do not match.");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Input validation error (from shared module)
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// A user with this email already exists
    #[error("email already registered")]
    DuplicateEmail,

    /// Unknown email or wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt could not hash the password
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// The session token could not be signed
    #[error("Session token error: {0}")]
    SessionToken(#[from] jsonwebtoken::errors::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new validation error for a form field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(SharedError::validation(field, message))
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Validation` - 400 Bad Request
    /// - `DuplicateEmail` - 409 Conflict
    /// - `InvalidCredentials` - 401 Unauthorized
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Validation(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Database(_)
            | Self::PasswordHash(_)
            | Self::SessionToken(_)
            | Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is a server fault rather than bad input
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Get the user-facing error message
    ///
    /// Server errors collapse to a generic message so store or crypto details
    /// never reach the caller.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Validation(err) => err.user_message().to_string(),
            Self::DuplicateEmail => DUPLICATE_EMAIL_MESSAGE.to_string(),
            Self::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            Self::Database(_)
            | Self::PasswordHash(_)
            | Self::SessionToken(_)
            | Self::SerializationError(_) => "Internal server error".to_string(),
        }
    }
}
