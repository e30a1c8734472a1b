//! Backend Module
//!
//! All server-side code for DragonBlock: an Axum HTTP server with account
//! signup and login, cookie sessions, and the campaign metadata store.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database setup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, user store, sessions, account handlers
//! - **`middleware`** - Login-required gate
//! - **`campaigns`** - Campaign metadata store and handlers
//! - **`pages`** - Server-rendered HTML
//! - **`error`** - Backend error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── campaigns/      - Campaign metadata
//! ├── pages/          - HTML pages
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the SQLite pool, the `SessionManager`, the password
//! hasher and the configuration. It is cloned into every handler; the only
//! mutable shared data is the live session set inside the session manager.
//!
//! # Error Handling
//!
//! Handlers return `BackendError`, which converts into a JSON error
//! response. Bad input on the account forms is rendered back into the page
//! instead.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Campaign metadata
pub mod campaigns;

/// Server-rendered HTML pages
pub mod pages;

pub use server::{create_app, AppState};
pub use error::BackendError;
