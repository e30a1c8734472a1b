/**
 * Login Handler
 *
 * This module implements `GET /login-page` and `POST /login`.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password using bcrypt
 * 3. Issue a session token and set it as the session cookie
 * 4. Redirect to `next` when it is a local path, otherwise `/home-page`
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 page
 * - `next` is only followed when it stays on this site
 */

use axum::{
    extract::{Query, State},
    http::{header::SET_COOKIE, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{LoginForm, LoginPageQuery};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::{get_user_by_email, User};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::pages;
use crate::backend::server::state::AppState;

/// Where a successful login lands without a usable `next`
pub const DEFAULT_LOGIN_REDIRECT: &str = "/home-page";

/// Check email and password against the credential store
///
/// # Errors
///
/// * `BackendError::InvalidCredentials` - Unknown email or wrong password
/// * `BackendError::Database` - The store could not be read
pub async fn authenticate(
    pool: &SqlitePool,
    hasher: &PasswordHasher,
    email: &str,
    password: &str,
) -> BackendResult<User> {
    let Some(user) = get_user_by_email(pool, email).await? else {
        tracing::warn!("Login attempt for unknown email: {}", email);
        return Err(BackendError::InvalidCredentials);
    };

    if !hasher.verify(password, &user.password_hash) {
        tracing::warn!("Invalid password for: {}", email);
        return Err(BackendError::InvalidCredentials);
    }

    Ok(user)
}

/// Pick the post-login redirect target
///
/// Only site-local paths are honoured: `next` must start with `/` and must
/// not be protocol-relative (`//host`) or contain a backslash.
pub fn redirect_target(next: Option<&str>) -> &str {
    match next.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path,
        _ => DEFAULT_LOGIN_REDIRECT,
    }
}

/// Render the login form
pub async fn login_page(Query(query): Query<LoginPageQuery>) -> Html<String> {
    pages::login_page(None, query.next.as_deref())
}

/// Login handler
///
/// # Returns
///
/// * `303 See Other` - Session cookie set, redirect to `next` or `/home-page`
/// * `401 Unauthorized` - Login page with "Invalid email or password."
///
/// # Errors
///
/// Store failures and token signing failures become a 500 JSON error.
pub async fn login(
    State(app_state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, BackendError> {
    let email = form.email.as_deref().map(str::trim).unwrap_or_default();
    let password = form.password.as_deref().unwrap_or_default();

    let result = if email.is_empty() || password.is_empty() {
        Err(BackendError::InvalidCredentials)
    } else {
        authenticate(&app_state.db_pool, &app_state.hasher, email, password).await
    };

    let user = match result {
        Ok(user) => user,
        Err(BackendError::InvalidCredentials) => {
            let page = pages::login_page(
                Some(BackendError::InvalidCredentials.message().as_str()),
                form.next.as_deref(),
            );
            return Ok((StatusCode::UNAUTHORIZED, page).into_response());
        }
        Err(e) => return Err(e),
    };

    let token = app_state.sessions.issue(&user.email).await?;
    let cookie = app_state.sessions.session_cookie(&token).map_err(|e| {
        tracing::error!("Failed to build session cookie: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    })?;

    tracing::info!("User logged in: {}", user.email);

    let target = redirect_target(form.next.as_deref());
    Ok(([(SET_COOKIE, cookie)], Redirect::to(target)).into_response())
}
