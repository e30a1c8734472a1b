//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs               - Module exports and documentation
//! ├── router.rs            - Main router creation
//! ├── public_routes.rs     - Routes reachable without a session
//! └── protected_routes.rs  - Routes behind the login gate
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `GET /`, `GET /signup-page`, `GET /login-page`
//! - `POST /signup`, `POST /login`, `POST /is-registered`
//!
//! ## Protected
//!
//! - `GET /logout`, `GET /home-page`, `GET /profile-page`
//! - `GET /create-campaign`, `POST /save-campaign`, `POST /get-campaigns`
//!
//! Anonymous requests to a protected route are redirected to
//! `/login-page?next=<path>`.
//!
//! ## Static
//!
//! - `/static/*` - Files from `AppConfig::static_dir`

/// Main router creation
pub mod router;

/// Public routes
pub mod public_routes;

/// Login-required routes
pub mod protected_routes;

pub use router::create_router;
