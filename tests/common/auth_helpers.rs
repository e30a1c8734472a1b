//! Authentication test helpers
//!
//! Signup and login through the HTTP surface, the way a browser would.

use axum::http::StatusCode;

use super::server::{TestApp, TestResponse};

/// Test user credentials
pub struct TestUser {
    pub email: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub birthday: &'static str,
    pub wallet_address: &'static str,
}

impl TestUser {
    /// The reference user: a@x.com / a / pw123 / 2000-01-01 / 0xABC
    pub fn alice() -> Self {
        Self {
            email: "a@x.com",
            username: "a",
            password: "pw123",
            birthday: "2000-01-01",
            wallet_address: "0xABC",
        }
    }

    pub fn bob() -> Self {
        Self {
            email: "b@x.com",
            username: "b",
            password: "hunter2",
            birthday: "1990-06-15",
            wallet_address: "0xB0B",
        }
    }

    /// Signup form fields with matching passwords
    pub fn signup_fields(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("email", self.email),
            ("username", self.username),
            ("password", self.password),
            ("password-confirm", self.password),
            ("birthday", self.birthday),
            ("wallet-address", self.wallet_address),
        ]
    }
}

/// Submit the signup form
pub async fn signup(app: &TestApp, user: &TestUser) -> TestResponse {
    app.post_form("/signup", &user.signup_fields(), None).await
}

/// Submit the login form
pub async fn login(app: &TestApp, email: &str, password: &str) -> TestResponse {
    app.post_form("/login", &[("email", email), ("password", password)], None)
        .await
}

/// Sign up and log in, returning the session cookie
pub async fn signup_and_login(app: &TestApp, user: &TestUser) -> String {
    let response = signup(app, user).await;
    assert_eq!(response.status, StatusCode::OK, "signup failed: {}", response.body);

    let response = login(app, user.email, user.password).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER, "login failed: {}", response.body);

    response
        .session_cookie()
        .expect("Login did not set a session cookie")
}
