//! Shared Module
//!
//! Types that are not tied to the HTTP layer: application configuration and
//! the validation error used by form handling.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
