//! Shared Error Types
//!
//! Errors that describe bad input rather than server failures. Handlers turn
//! them into re-rendered forms or 4xx responses.
//!
//! # Error Categories
//!
//! - `ValidationError` - A form field is missing, malformed, or inconsistent
//! - `SerializationError` - JSON serialization/deserialization failures
//!
//! # Usage
//!
//! ```rust
//! use dragonblock::shared::error::SharedError;
//!
//! let error = SharedError::validation("password", "Passwords do not match.");
//! assert_eq!(error.user_message(), "Passwords do not match.");
//! ```
use thiserror::Error;

/// Input errors shared by every handler
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Message shown to the user
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
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

    /// The message suitable for rendering back to the user, without the
    /// field prefix used by `Display`.
    pub fn user_message(&self) -> &str {
        match self {
            Self::SerializationError { message } => message,
            Self::ValidationError { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
