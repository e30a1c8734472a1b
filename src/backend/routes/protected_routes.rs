/**
 * Protected Routes
 *
 * Routes that need a live session. The caller layers `require_login` over
 * the returned router; handlers read the user through `AuthUser`.
 *
 * # Routes
 *
 * - `GET /logout` - End the session
 * - `GET /home-page` - Home page
 * - `GET /profile-page` - Profile page
 * - `GET /create-campaign` - Campaign creation page
 * - `POST /save-campaign` - Store campaign metadata
 * - `POST /get-campaigns` - Bulk fetch campaign metadata
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{home_page, logout, profile_page};
use crate::backend::campaigns::{create_campaign_page, get_campaigns, save_campaign};
use crate::backend::server::state::AppState;

/// Configure routes that require login
pub fn configure_protected_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/logout", get(logout))
        .route("/home-page", get(home_page))
        .route("/profile-page", get(profile_page))
        // Campaign metadata
        .route("/create-campaign", get(create_campaign_page))
        .route("/save-campaign", post(save_campaign))
        .route("/get-campaigns", post(get_campaigns))
}
