//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Login-required gate and the `AuthUser` extractor
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use dragonblock::backend::middleware::require_login;
//!
//! let protected = Router::new()
//!     .route("/home-page", get(home_page))
//!     .route_layer(from_fn_with_state(app_state.clone(), require_login));
//! ```

pub mod auth;

pub use auth::{require_login, AuthUser, AuthenticatedUser};
