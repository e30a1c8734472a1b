//! Application configuration module
//!
//! Configuration is read from environment variables (after `.env` is loaded by
//! the binary). Every value has a default suitable for local development.
//!
//! | Variable                   | Default                          |
//! |----------------------------|----------------------------------|
//! | `DATABASE_URL`             | `sqlite:dragonblock.db?mode=rwc` |
//! | `DATABASE_MAX_CONNECTIONS` | `5`                              |
//! | `SERVER_PORT`              | `3000`                           |
//! | `BCRYPT_COST`              | `bcrypt::DEFAULT_COST`           |
//! | `SESSION_COOKIE_SECURE`    | `false`                          |
//! | `STATIC_DIR`               | `static`                         |

use thiserror::Error;

/// Default SQLite database, created on first start
pub const DEFAULT_DATABASE_URL: &str = "sqlite:dragonblock.db?mode=rwc";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default size of the database connection pool
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Work factors accepted by bcrypt
pub const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// sqlx connection string for the credential and campaign store
    pub database_url: String,
    /// Upper bound on pooled store connections
    pub database_max_connections: u32,
    /// Port the HTTP server binds on all interfaces
    pub server_port: u16,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Whether the session cookie carries the `Secure` attribute
    pub session_cookie_secure: bool,
    /// Directory served under `/static`
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            server_port: DEFAULT_SERVER_PORT,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            session_cookie_secure: false,
            static_dir: "static".to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set but unparsable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(raw) = lookup("DATABASE_MAX_CONNECTIONS") {
            let max = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue { key: "DATABASE_MAX_CONNECTIONS", value: raw })?;
            builder = builder.database_max_connections(max);
        }
        if let Some(raw) = lookup("SERVER_PORT") {
            let port = raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "SERVER_PORT", value: raw })?;
            builder = builder.server_port(port);
        }
        if let Some(raw) = lookup("BCRYPT_COST") {
            let cost = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue { key: "BCRYPT_COST", value: raw })?;
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(raw) = lookup("SESSION_COOKIE_SECURE") {
            let secure = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => return Err(ConfigError::InvalidValue { key: "SESSION_COOKIE_SECURE", value: raw }),
            };
            builder = builder.session_cookie_secure(secure);
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            builder = builder.static_dir(dir);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.database_max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    database_max_connections: Option<u32>,
    server_port: Option<u16>,
    bcrypt_cost: Option<u32>,
    session_cookie_secure: Option<bool>,
    static_dir: Option<String>,
}

impl AppConfigBuilder {
    /// Set the database connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the connection pool size
    pub fn database_max_connections(mut self, max: u32) -> Self {
        self.database_max_connections = Some(max);
        self
    }

    /// Set the HTTP port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Mark the session cookie `Secure`
    pub fn session_cookie_secure(mut self, secure: bool) -> Self {
        self.session_cookie_secure = Some(secure);
        self
    }

    /// Set the static asset directory
    pub fn static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            database_max_connections: self
                .database_max_connections
                .unwrap_or(defaults.database_max_connections),
            server_port: self.server_port.unwrap_or(defaults.server_port),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(defaults.bcrypt_cost),
            session_cookie_secure: self
                .session_cookie_secure
                .unwrap_or(defaults.session_cookie_secure),
            static_dir: self.static_dir.unwrap_or(defaults.static_dir),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
