//! DragonBlock - Main Library
//!
//! DragonBlock is the web backend for a crowdfunding DApp. Campaign funds live
//! on-chain; this server owns everything around them: user accounts, login
//! sessions, and the off-chain campaign metadata (titles and descriptions).
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration and error types used across the crate
//! - **`backend`** - Axum HTTP server
//!   - Signup, login and cookie sessions
//!   - Login-required gating for protected pages
//!   - Campaign metadata and wallet registration lookups
//!
//! # Usage
//!
//! ```rust,no_run
//! use dragonblock::backend::server::init::create_app;
//! use dragonblock::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for validation failures
//! - `backend::error::BackendError` for everything a handler can fail with;
//!   it converts directly into an HTTP response

/// Shared types and configuration
pub mod shared;

/// Backend server-side code
pub mod backend;
