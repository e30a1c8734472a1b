//! Wallet registration integration tests

use axum::http::StatusCode;
use dragonblock::backend::auth::handlers::IsRegisteredResponse;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{signup, TestApp, TestUser};

async fn is_registered(app: &TestApp, address: &str) -> bool {
    let response = app
        .post_json("/is-registered", &json!({ "ethereum_address": address }), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response.json::<IsRegisteredResponse>().success
}

#[tokio::test]
async fn test_is_registered_before_and_after_signup() {
    let app = TestApp::new().await;

    assert!(!is_registered(&app, "0xABC").await);

    signup(&app, &TestUser::alice()).await;

    assert!(is_registered(&app, "0xABC").await);
    assert!(!is_registered(&app, "0xDEF").await);
}

#[tokio::test]
async fn test_is_registered_blank_address() {
    let app = TestApp::new().await;
    signup(&app, &TestUser::alice()).await;

    assert!(!is_registered(&app, "  ").await);
}

#[tokio::test]
async fn test_is_registered_response_shape() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/is-registered", &json!({ "ethereum_address": "0x0" }), None)
        .await;

    assert_eq!(response.json::<serde_json::Value>(), json!({ "success": false }));
}
