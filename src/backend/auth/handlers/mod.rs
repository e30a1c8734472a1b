//! Authentication Handlers Module
//!
//! HTTP handlers for the account and session endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs           - Module exports and documentation
//! ├── types.rs         - Form and JSON bodies
//! ├── signup.rs        - Signup page and registration
//! ├── login.rs         - Login page and authentication
//! ├── logout.rs        - Session teardown
//! ├── pages.rs         - Landing, home and profile pages
//! └── registration.rs  - Wallet registration lookup
//! ```
//!
//! # Handlers
//!
//! - **`signup_page`** / **`signup`** - GET /signup-page, POST /signup
//! - **`login_page`** / **`login`** - GET /login-page, POST /login
//! - **`logout`** - GET /logout (login required)
//! - **`landing`** - GET /
//! - **`home_page`** / **`profile_page`** - login required
//! - **`is_registered`** - POST /is-registered

/// Form and JSON bodies
pub mod types;

/// Signup handlers
pub mod signup;

/// Login handlers
pub mod login;

/// Logout handler
pub mod logout;

/// Page handlers
pub mod pages;

/// Wallet registration handler
pub mod registration;

pub use types::{IsRegisteredRequest, IsRegisteredResponse, LoginForm, SignupForm};

pub use signup::{signup, signup_page};
pub use login::{login, login_page};
pub use logout::logout;
pub use pages::{home_page, landing, profile_page};
pub use registration::is_registered;
