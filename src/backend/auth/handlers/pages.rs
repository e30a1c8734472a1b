/**
 * Page Handlers
 *
 * The landing page is public; home and profile require a session and read
 * the user that the login gate resolved.
 */

use axum::response::Html;

use crate::backend::middleware::auth::AuthUser;
use crate::backend::pages;

/// `GET /`
pub async fn landing() -> Html<String> {
    pages::landing_page()
}

/// `GET /home-page`
pub async fn home_page(AuthUser(user): AuthUser) -> Html<String> {
    pages::home_page(&user)
}

/// `GET /profile-page`
pub async fn profile_page(AuthUser(user): AuthUser) -> Html<String> {
    pages::profile_page(&user)
}
