//! Test server
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        HeaderMap, Method, Request, StatusCode,
    },
    Router,
};
use dragonblock::backend::auth::sessions::SESSION_COOKIE_NAME;
use dragonblock::backend::routes::create_router;
use dragonblock::backend::server::state::AppState;
use dragonblock::shared::AppConfig;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::database::create_test_pool;

/// Lowest cost bcrypt accepts; keeps tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Application under test
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

/// Buffered response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// `name=value` of the session cookie set by this response, if any
    pub fn session_cookie(&self) -> Option<String> {
        self.set_cookie_header()
            .and_then(|header| header.split(';').next().map(str::to_string))
    }

    /// Raw `Set-Cookie` header for the session cookie
    pub fn set_cookie_header(&self) -> Option<&str> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with(&format!("{SESSION_COOKIE_NAME}=")))
    }

    /// `Location` header of a redirect
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|value| value.to_str().ok())
    }

    /// Parse the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_str(&self.body).expect("Response body is not the expected JSON")
    }
}

impl TestApp {
    /// Build the app on a fresh in-memory database
    pub async fn new() -> Self {
        let config = AppConfig::builder()
            .database_url("sqlite::memory:")
            .bcrypt_cost(TEST_BCRYPT_COST)
            .static_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
            .build()
            .expect("Invalid test configuration");

        let state = AppState::new(create_test_pool().await, config);
        let router = create_router(state.clone());

        Self { state, router }
    }

    /// Send a request through the router
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(Method::GET).uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// POST an `application/x-www-form-urlencoded` body
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();

        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    /// POST a JSON body
    pub async fn post_json(&self, path: &str, json: &serde_json::Value, cookie: Option<&str>) -> TestResponse {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::from(json.to_string())).unwrap()).await
    }
}
