/**
 * Server Initialization
 *
 * Builds the Axum application from configuration.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and run migrations
 * 2. Generate the session signing secret
 * 3. Create the router with all routes and middleware
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated; the server does
/// not start without its store.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing DragonBlock backend server");

    let db_pool = load_database(&config).await?;

    let app_state = AppState::new(db_pool, config);
    tracing::info!("Session signing secret generated; sessions from previous runs are invalid");

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
