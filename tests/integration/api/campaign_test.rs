//! Campaign integration tests

use axum::http::StatusCode;
use dragonblock::backend::campaigns::Campaign;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{count_rows, signup_and_login, TestApp, TestUser};

async fn save(app: &TestApp, cookie: &str, id: &str, title: &str) -> (StatusCode, String) {
    let description = format!("{title} description");
    let response = app
        .post_form(
            "/save-campaign",
            &[("id", id), ("title", title), ("description", description.as_str())],
            Some(cookie),
        )
        .await;
    (response.status, response.body)
}

#[tokio::test]
async fn test_create_campaign_page() {
    let app = TestApp::new().await;
    let cookie = signup_and_login(&app, &TestUser::alice()).await;

    let response = app.get("/create-campaign", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_contains!(response.body, r#"id="title""#);
}

#[tokio::test]
async fn test_save_campaign() {
    let app = TestApp::new().await;
    let cookie = signup_and_login(&app, &TestUser::alice()).await;

    assert_eq!(save(&app, &cookie, "1", "Solar").await, (StatusCode::OK, "success".to_string()));
    assert_eq!(count_rows(&app.state.db_pool, "campaigns").await, 1);
}

#[tokio::test]
async fn test_save_campaign_missing_field() {
    let app = TestApp::new().await;
    let cookie = signup_and_login(&app, &TestUser::alice()).await;

    let response = app
        .post_form("/save-campaign", &[("id", "1"), ("title", "Solar")], Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "error");
    assert_eq!(count_rows(&app.state.db_pool, "campaigns").await, 0);
}

#[tokio::test]
async fn test_save_campaign_duplicate_id() {
    let app = TestApp::new().await;
    let cookie = signup_and_login(&app, &TestUser::alice()).await;

    save(&app, &cookie, "1", "Solar").await;
    let second = save(&app, &cookie, "1", "Wind").await;

    assert_eq!(second, (StatusCode::CONFLICT, "error".to_string()));
    assert_eq!(count_rows(&app.state.db_pool, "campaigns").await, 1);
}

#[tokio::test]
async fn test_get_campaigns_empty_list() {
    let app = TestApp::new().await;
    let cookie = signup_and_login(&app, &TestUser::alice()).await;

    let response = app
        .post_json("/get-campaigns", &json!({ "campaign_ids": [] }), Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<Vec<Campaign>>(), vec![]);
}

#[tokio::test]
async fn test_get_campaigns_in_requested_order() {
    let app = TestApp::new().await;
    let cookie = signup_and_login(&app, &TestUser::alice()).await;
    for (id, title) in [("1", "Solar"), ("2", "Wind"), ("3", "Tidal")] {
        save(&app, &cookie, id, title).await;
    }

    let response = app
        .post_json("/get-campaigns", &json!({ "campaign_ids": [3, "1", 99] }), Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let campaigns: Vec<Campaign> = response.json();
    let titles: Vec<&str> = campaigns.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Tidal", "Solar"]);
    assert_eq!(campaigns[0].id, "3");
    assert_eq!(campaigns[0].description, "Tidal description");
}

#[tokio::test]
async fn test_campaigns_are_shared_between_users() {
    let app = TestApp::new().await;
    let alice = signup_and_login(&app, &TestUser::alice()).await;
    let bob = signup_and_login(&app, &TestUser::bob()).await;

    save(&app, &alice, "5", "Solar").await;

    let response = app
        .post_json("/get-campaigns", &json!({ "campaign_ids": ["5"] }), Some(&bob))
        .await;
    assert_eq!(response.json::<Vec<Campaign>>().len(), 1);
}
