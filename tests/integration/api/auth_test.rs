//! Authentication integration tests
//!
//! Signup, login and logout through the HTTP surface.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{count_rows, login, signup, signup_and_login, TestApp, TestUser};
use dragonblock::backend::auth::users::get_user_by_email;

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::new().await;

    let response = signup(&app, &TestUser::alice()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_contains!(response.body, "Signup successful!");
    assert_eq!(count_rows(&app.state.db_pool, "users").await, 1);
}

#[tokio::test]
async fn test_signup_stores_hash_not_password() {
    let app = TestApp::new().await;
    let alice = TestUser::alice();
    signup(&app, &alice).await;

    let user = get_user_by_email(&app.state.db_pool, alice.email)
        .await
        .unwrap()
        .unwrap();

    assert_ne!(user.password_hash, alice.password);
    assert!(app.state.hasher.verify(alice.password, &user.password_hash));
    assert_eq!(user.wallet_address, alice.wallet_address);
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::new().await;

    let first = signup(&app, &TestUser::alice()).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = signup(&app, &TestUser::alice()).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_contains!(second.body, "Email already registered. Please use a different email.");
    assert_eq!(count_rows(&app.state.db_pool, "users").await, 1);
}

#[tokio::test]
async fn test_signup_password_mismatch() {
    let app = TestApp::new().await;
    let alice = TestUser::alice();

    let mut fields = alice.signup_fields();
    fields[3] = ("password-confirm", "something-else");
    let response = app.post_form("/signup", &fields, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_contains!(response.body, "Passwords do not match.");
    assert_eq!(count_rows(&app.state.db_pool, "users").await, 0);
}

#[tokio::test]
async fn test_signup_missing_field() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/signup", &[("email", "a@x.com"), ("password", "pw123")], None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_contains!(response.body, "All fields are required.");
    assert_eq!(count_rows(&app.state.db_pool, "users").await, 0);
}

#[tokio::test]
async fn test_signup_invalid_birthday() {
    let app = TestApp::new().await;

    let mut fields = TestUser::alice().signup_fields();
    fields[4] = ("birthday", "not-a-date");
    let response = app.post_form("/signup", &fields, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_contains!(response.body, "Birthday must be a valid date (YYYY-MM-DD).");
}

#[tokio::test]
async fn test_signup_accepts_wallet_field_aliases() {
    let app = TestApp::new().await;
    let alice = TestUser::alice();

    let fields = [
        ("email", alice.email),
        ("username", alice.username),
        ("password", alice.password),
        ("password-confirm", alice.password),
        ("birthday", alice.birthday),
        ("metamask-address", alice.wallet_address),
    ];
    let response = app.post_form("/signup", &fields, None).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_success_sets_session_cookie() {
    let app = TestApp::new().await;
    let alice = TestUser::alice();
    signup(&app, &alice).await;

    let response = login(&app, alice.email, alice.password).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/home-page"));

    let set_cookie = response.set_cookie_header().expect("session cookie");
    assert_contains!(set_cookie, "HttpOnly");
    assert_contains!(set_cookie, "SameSite=Lax");
    assert_contains!(set_cookie, "Path=/");
    assert_not_contains!(set_cookie, "Max-Age");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    let alice = TestUser::alice();
    signup(&app, &alice).await;

    let unknown = login(&app, "nobody@x.com", alice.password).await;
    let wrong = login(&app, alice.email, "wrong-password").await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body, wrong.body);
    assert_contains!(unknown.body, "Invalid email or password.");
    assert!(unknown.session_cookie().is_none());
    assert!(wrong.session_cookie().is_none());
}

#[tokio::test]
async fn test_login_redirects_to_local_next() {
    let app = TestApp::new().await;
    let alice = TestUser::alice();
    signup(&app, &alice).await;

    let response = app
        .post_form(
            "/login",
            &[("email", alice.email), ("password", alice.password), ("next", "/profile-page")],
            None,
        )
        .await;
    assert_eq!(response.location(), Some("/profile-page"));

    let response = app
        .post_form(
            "/login",
            &[("email", alice.email), ("password", alice.password), ("next", "//evil.example")],
            None,
        )
        .await;
    assert_eq!(response.location(), Some("/home-page"));
}

#[tokio::test]
async fn test_login_page_renders_next() {
    let app = TestApp::new().await;

    let response = app.get("/login-page?next=%2Fcreate-campaign", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_contains!(response.body, r#"name="next" value="/create-campaign""#);
}

#[tokio::test]
async fn test_reference_user_scenario() {
    let app = TestApp::new().await;
    let cookie = signup_and_login(&app, &TestUser::alice()).await;

    let response = app.get("/profile-page", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_contains!(response.body, r#"<dd id="username">a</dd>"#);
    assert_contains!(response.body, "0xABC");
    assert_contains!(response.body, "2000-01-01");
    assert_not_contains!(response.body, "$2");
}

#[tokio::test]
async fn test_home_page_shows_username() {
    let app = TestApp::new().await;
    let cookie = signup_and_login(&app, &TestUser::bob()).await;

    let response = app.get("/home-page", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_contains!(response.body, r#"<span id="username">b</span>"#);
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let app = TestApp::new().await;
    let cookie = signup_and_login(&app, &TestUser::alice()).await;
    assert_eq!(app.get("/home-page", Some(&cookie)).await.status, StatusCode::OK);

    let response = app.get("/logout", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
    assert_contains!(response.set_cookie_header().unwrap(), "Max-Age=0");

    // Replaying the old cookie no longer resolves
    let response = app.get("/home-page", Some(&cookie)).await;
    assert_login_redirect!(response, "/home-page");
}

#[tokio::test]
async fn test_logout_leaves_other_sessions() {
    let app = TestApp::new().await;
    let alice = TestUser::alice();
    let first = signup_and_login(&app, &alice).await;
    let second = login(&app, alice.email, alice.password)
        .await
        .session_cookie()
        .unwrap();

    app.get("/logout", Some(&first)).await;

    assert_eq!(app.get("/home-page", Some(&second)).await.status, StatusCode::OK);
}
