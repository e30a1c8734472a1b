/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Assembly
 *
 * 1. Public routes (landing, signup, login, wallet lookup)
 * 2. Protected routes, wrapped in the `require_login` route layer
 * 3. Static assets under `/static`
 * 4. Fallback handler (404)
 *
 * The login gate is a route layer, so it only runs for requests that matched
 * a protected route; unknown paths still reach the fallback.
 */

use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::middleware::auth::require_login;
use crate::backend::routes::protected_routes::configure_protected_routes;
use crate::backend::routes::public_routes::configure_public_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state shared with every handler
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let public = configure_public_routes(Router::new());

    let protected = configure_protected_routes(Router::new())
        .route_layer(from_fn_with_state(app_state.clone(), require_login));

    let router = Router::new().merge(public).merge(protected);

    // Front-end assets
    let router = router.nest_service("/static", ServeDir::new(&app_state.config.static_dir));

    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
