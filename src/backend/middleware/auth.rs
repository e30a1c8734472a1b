/**
 * Authentication Middleware
 *
 * Gates protected routes behind a live login session. The session cookie is
 * resolved to a user record before the handler runs; anonymous callers are
 * sent to the login page with the path they asked for in `next`.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::backend::auth::sessions::SessionState;
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// User resolved by [`require_login`], stored in request extensions
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub User);

/// Build the login redirect for an anonymous request to `uri`
pub fn login_redirect(uri: &Uri) -> Redirect {
    let original = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let next: String = url::form_urlencoded::byte_serialize(original.as_bytes()).collect();
    Redirect::to(&format!("/login-page?next={next}"))
}

/// Login-required middleware
///
/// This middleware:
/// 1. Resolves the session cookie against the live session set and the store
/// 2. Attaches the user to request extensions for [`AuthUser`]
/// 3. Redirects (303) anonymous callers to `/login-page?next=...`
///
/// # Errors
///
/// A store failure while loading the user becomes a 500 response.
pub async fn require_login(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let state = app_state
        .sessions
        .resolve(&app_state.db_pool, request.headers())
        .await?;

    match state {
        SessionState::Authenticated(user) => {
            request.extensions_mut().insert(AuthenticatedUser(user));
            Ok(next.run(request).await)
        }
        SessionState::Anonymous => {
            tracing::debug!("Anonymous request to {}, redirecting to login", request.uri().path());
            Ok(login_redirect(request.uri()).into_response())
        }
    }
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes layered with [`require_login`]; elsewhere it
/// rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .map(|AuthenticatedUser(user)| AuthUser(user.clone()))
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                StatusCode::UNAUTHORIZED
            })
    }
}
