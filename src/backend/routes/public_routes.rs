/**
 * Public Routes
 *
 * Routes reachable without a session.
 *
 * # Routes
 *
 * ## Pages
 * - `GET /` - Landing page
 * - `GET /signup-page` - Signup form
 * - `GET /login-page` - Login form (optional `next` query)
 *
 * ## Forms and API
 * - `POST /signup` - User registration
 * - `POST /login` - User login, sets the session cookie
 * - `POST /is-registered` - Wallet registration lookup
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{is_registered, landing, login, login_page, signup, signup_page};
use crate::backend::server::state::AppState;

/// Configure public routes
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(landing))
        // Account endpoints
        .route("/signup-page", get(signup_page))
        .route("/signup", post(signup))
        .route("/login-page", get(login_page))
        .route("/login", post(login))
        // Queried by the front end before it offers a wallet login
        .route("/is-registered", post(is_registered))
}
