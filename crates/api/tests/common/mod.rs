//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as
//! `main.rs`) over a test database pool and provides request helpers
//! using `tower::ServiceExt::oneshot`, so no TCP listener is needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use assetbase_api::config::ServerConfig;
use assetbase_api::router::build_app_router;
use assetbase_api::state::AppState;
use assetbase_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::new(EventBus::default()),
    };

    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request to the app.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an asset type via the API, returning its id.
pub async fn seed_asset_type(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/asset-types",
        serde_json::json!({ "name": name }),
    )
    .await;
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("asset type id")
}

/// Create an asset via the API, returning its id.
pub async fn seed_asset(pool: &PgPool, code: &str, name: &str, type_id: i64) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/assets",
        serde_json::json!({ "code": code, "name": name, "type_id": type_id }),
    )
    .await;
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("asset id")
}

/// Create an employee via the API, returning its id.
pub async fn seed_employee(pool: &PgPool, email: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/employees",
        serde_json::json!({
            "first_name": "Alex",
            "last_name": "Rivera",
            "email": email,
        }),
    )
    .await;
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("employee id")
}

/// Check an asset out via the API.
pub async fn seed_check_out(pool: &PgPool, asset_id: i64, employee_id: i64) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/operations/check-out",
        serde_json::json!({ "asset_id": asset_id, "employee_id": employee_id }),
    )
    .await;
    assert!(
        response.status().is_success(),
        "seed check-out should succeed"
    );
}
