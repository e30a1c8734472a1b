//! Authentication Module
//!
//! User registration, login sessions, and identity resolution.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`users`** - User record, `Identity` trait, credential store queries
//! - **`sessions`** - Signed session cookies and the live session set
//! - **`handlers`** - HTTP handlers for the account endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - Password hasher
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Session manager
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: form validated → password hashed → user stored
//! 2. **Login**: credentials verified → session token issued as an `HttpOnly` cookie
//! 3. **Request**: cookie verified → session id checked live → user loaded by email
//! 4. **Logout**: session id revoked → cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage and never rendered
//! - Invalid credentials return 401 with one message for every cause
//! - The signing secret exists only in memory; a restart ends all sessions

/// Password hashing
pub mod password;

/// User data model and database operations
pub mod users;

/// Session token issuance and resolution
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use password::PasswordHasher;
pub use sessions::{SessionManager, SessionState};
pub use users::{Identity, User};
