/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the router. It holds:
 * - The SQLite connection pool (credential and campaign store)
 * - The session manager (signing keys and live session ids)
 * - The password hasher
 * - The loaded configuration
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part they use,
 * e.g. `State(pool): State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionManager;
use crate::shared::AppConfig;

/// Application state shared by every handler
///
/// # Thread Safety
///
/// - `SqlitePool` hands out a pooled connection per query
/// - `SessionManager` shares its keys through `Arc` and guards the live
///   session set with a `tokio::sync::RwLock`
/// - `PasswordHasher` and `AppConfig` are immutable after startup
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Session signing and resolution
    ///
    /// The signing secret inside is generated at startup and lost on exit.
    pub sessions: SessionManager,

    /// bcrypt hasher configured with the startup cost
    pub hasher: PasswordHasher,

    /// Configuration the server was started with
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Assemble state from its parts, generating a fresh signing secret
    pub fn new(db_pool: SqlitePool, config: AppConfig) -> Self {
        Self {
            db_pool,
            sessions: SessionManager::generate(config.session_cookie_secure),
            hasher: PasswordHasher::new(config.bcrypt_cost),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for SessionManager {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher
    }
}
