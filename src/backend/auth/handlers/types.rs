/**
 * Authentication Handler Types
 *
 * Form and JSON bodies accepted by the authentication handlers.
 *
 * Form fields are optional at the type level so that a missing field reaches
 * the handler and is reported with the same message as an empty one, instead
 * of being rejected by the extractor.
 */

use serde::{Deserialize, Serialize};

/// Signup form submitted by the signup page
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SignupForm {
    pub email: Option<String>,
    pub username: Option<String>,
    /// Plaintext; hashed before storage and never trimmed
    pub password: Option<String>,
    #[serde(rename = "password-confirm")]
    pub password_confirm: Option<String>,
    /// `YYYY-MM-DD`
    pub birthday: Option<String>,
    #[serde(
        rename = "wallet-address",
        alias = "metamask-address",
        alias = "ethereum-address"
    )]
    pub wallet_address: Option<String>,
}

/// Login form submitted by the login page
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Local path to return to after login
    pub next: Option<String>,
}

/// Query string of `GET /login-page`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct LoginPageQuery {
    pub next: Option<String>,
}

/// Wallet registration check request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct IsRegisteredRequest {
    pub ethereum_address: String,
}

/// Wallet registration check response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IsRegisteredResponse {
    /// Whether some user registered this wallet address
    pub success: bool,
}
