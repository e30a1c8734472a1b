/**
 * User Model and Database Operations
 *
 * The credential store: the `users` table keyed by email, and the identity
 * resolver that turns a session's email back into a full record.
 */

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::error::{BackendError, BackendResult};

/// Capability interface for anything that can stand for the current caller
pub trait Identity {
    /// Stable identifier bound into the session, if any
    fn unique_id(&self) -> Option<&str>;

    /// Whether this identity passed login
    fn is_authenticated(&self) -> bool;
}

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    /// User email address, the unique identifier
    pub email: String,
    /// Display name
    pub username: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Date of birth
    pub birthday: NaiveDate,
    /// Chain address the user registered with
    pub wallet_address: String,
}

impl Identity for User {
    fn unique_id(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn is_authenticated(&self) -> bool {
        true
    }
}

/// Validated signup data, ready to insert
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub birthday: NaiveDate,
    pub wallet_address: String,
}

/// Create a new user
///
/// # Errors
///
/// * `BackendError::DuplicateEmail` - if the email's primary key already exists
/// * `BackendError::Database` - for any other store failure
pub async fn create_user(pool: &SqlitePool, new_user: NewUser) -> BackendResult<User> {
    let result = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, username, password_hash, birthday, wallet_address)
        VALUES (?, ?, ?, ?, ?)
        RETURNING email, username, password_hash, birthday, wallet_address
        "#
    )
    .bind(&new_user.email)
    .bind(&new_user.username)
    .bind(&new_user.password_hash)
    .bind(new_user.birthday)
    .bind(&new_user.wallet_address)
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => Ok(user),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(BackendError::DuplicateEmail)
        }
        Err(e) => Err(e.into()),
    }
}

/// Get user by email
///
/// This is the identity resolver: a plain read with no caching. `None` means
/// the email is not registered.
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT email, username, password_hash, birthday, wallet_address
        FROM users
        WHERE email = ?
        "#
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Check whether any user registered with this wallet address
pub async fn is_wallet_registered(
    pool: &SqlitePool,
    wallet_address: &str,
) -> Result<bool, sqlx::Error> {
    let (exists,): (i64,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM users WHERE wallet_address = ?)"
    )
    .bind(wallet_address)
    .fetch_one(pool)
    .await?;

    Ok(exists != 0)
}

/// Count users registered under an email (0 or 1 given the primary key)
pub async fn count_users_with_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
