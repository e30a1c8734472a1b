/**
 * Signup Handler
 *
 * This module implements user registration for `GET /signup-page` and
 * `POST /signup`.
 *
 * # Registration Process
 *
 * 1. Check that every field is present and non-blank
 * 2. Check that both passwords match
 * 3. Parse the birthday as `YYYY-MM-DD`
 * 4. Reject an email that is already registered
 * 5. Hash the password and store the user
 *
 * Validation failures never touch the store. The duplicate pre-check only
 * gives the common case a cheap answer; the primary key on `users.email`
 * decides when two signups race.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::SignupForm;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::{create_user, get_user_by_email, NewUser, User};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::pages::{self, Notice};
use crate::backend::server::state::AppState;

/// Message for a form with a blank or missing field
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required.";

/// Message for differing password and confirmation
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// Message for a birthday that is not a calendar date
pub const INVALID_BIRTHDAY_MESSAGE: &str = "Birthday must be a valid date (YYYY-MM-DD).";

/// Message rendered after a successful signup
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Signup successful!";

/// Trimmed, non-blank value of a text field
fn required_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Non-empty password, taken verbatim
fn required_password(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Parse a `YYYY-MM-DD` birthday
pub fn parse_birthday(value: &str) -> BackendResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| BackendError::validation("birthday", INVALID_BIRTHDAY_MESSAGE))
}

/// Validate a signup form and create the user
///
/// # Errors
///
/// * `BackendError::Validation` - Missing field, password mismatch or bad birthday
/// * `BackendError::DuplicateEmail` - The email is already registered
/// * `BackendError::Database` / `BackendError::PasswordHash` - Server failures
pub async fn register_user(
    pool: &SqlitePool,
    hasher: &PasswordHasher,
    form: &SignupForm,
) -> BackendResult<User> {
    let fields = (
        required_text(form.email.as_deref()),
        required_text(form.username.as_deref()),
        required_password(form.password.as_deref()),
        required_password(form.password_confirm.as_deref()),
        required_text(form.birthday.as_deref()),
        required_text(form.wallet_address.as_deref()),
    );
    let (
        Some(email),
        Some(username),
        Some(password),
        Some(password_confirm),
        Some(birthday),
        Some(wallet_address),
    ) = fields
    else {
        return Err(BackendError::validation("form", MISSING_FIELDS_MESSAGE));
    };

    if password != password_confirm {
        return Err(BackendError::validation("password-confirm", PASSWORD_MISMATCH_MESSAGE));
    }

    let birthday = parse_birthday(&birthday)?;

    if get_user_by_email(pool, &email).await?.is_some() {
        return Err(BackendError::DuplicateEmail);
    }

    let password_hash = hasher.hash(&password)?;

    create_user(
        pool,
        NewUser {
            email,
            username,
            password_hash,
            birthday,
            wallet_address,
        },
    )
    .await
}

/// Render the signup form
pub async fn signup_page() -> Html<String> {
    pages::signup_page(None)
}

/// Sign up handler
///
/// Re-renders the signup page in every outcome except a server failure.
///
/// # Returns
///
/// * `200 OK` - Signup page with "Signup successful!"
/// * `400 Bad Request` - Signup page with the validation message
/// * `409 Conflict` - Signup page with the duplicate email message
///
/// # Errors
///
/// Store and hashing failures become a 500 JSON error.
pub async fn signup(
    State(app_state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Response, BackendError> {
    match register_user(&app_state.db_pool, &app_state.hasher, &form).await {
        Ok(user) => {
            tracing::info!("User signed up: {}", user.email);
            Ok((
                StatusCode::OK,
                pages::signup_page(Some(Notice::Success(SIGNUP_SUCCESS_MESSAGE))),
            )
                .into_response())
        }
        Err(e) if !e.is_server_error() => {
            tracing::warn!("Signup rejected: {}", e);
            let message = e.message();
            Ok((e.status_code(), pages::signup_page(Some(Notice::Error(&message)))).into_response())
        }
        Err(e) => Err(e),
    }
}
