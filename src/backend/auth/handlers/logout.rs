/**
 * Logout Handler
 *
 * `GET /logout` revokes the caller's session id and tells the browser to drop
 * the cookie. The route sits behind the login gate, so a session is present.
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};

use crate::backend::auth::sessions::{extract_session_token, SessionManager};
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;

/// Logout handler
///
/// Redirects (303) to `/` with a `Max-Age=0` session cookie.
pub async fn logout(
    State(sessions): State<SessionManager>,
    AuthUser(user): AuthUser,
    headers: HeaderMap,
) -> Result<Response, BackendError> {
    if let Some(token) = extract_session_token(&headers) {
        sessions.revoke(&token).await;
    }

    let cookie = sessions.clear_session_cookie().map_err(|e| {
        tracing::error!("Failed to build session cookie: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    })?;

    tracing::info!("User logged out: {}", user.email);

    Ok(([(SET_COOKIE, cookie)], Redirect::to("/")).into_response())
}
