//! Tests for the shared error envelope: every failure path produces a
//! `{ "error", "code" }` JSON body with the right status.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{body_json, delete, get, post_json};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_validation_error_shape(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/asset-types", serde_json::json!({"name": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_not_found_error_shape(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/assets/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Asset with id 424242 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_conflict_error_shape(pool: PgPool) {
    common::seed_asset_type(&pool, "Laptop").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/asset-types",
        serde_json::json!({"name": "Laptop"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_transition_error_shape(pool: PgPool) {
    let laptop = common::seed_asset_type(&pool, "Laptop").await;
    let asset = common::seed_asset(&pool, "LT-001", "ThinkPad", laptop).await;
    let employee = common::seed_employee(&pool, "alex@example.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/operations/check-in",
        serde_json::json!({
            "asset_id": asset,
            "employee_id": employee,
            "new_status": "AVAILABLE",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_TRANSITION");
    assert_eq!(json["error"], "Asset is not currently in use");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_referenced_entity_error_shape(pool: PgPool) {
    let laptop = common::seed_asset_type(&pool, "Laptop").await;
    common::seed_asset(&pool, "LT-001", "ThinkPad", laptop).await;

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/asset-types/{laptop}")).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "REFERENCED_ENTITY");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_rejected(pool: PgPool) {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use tower::ServiceExt;

    let app = common::build_test_app(pool);
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/asset-types")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_check_in_with_invalid_status_value_rejected(pool: PgPool) {
    let laptop = common::seed_asset_type(&pool, "Laptop").await;
    let asset = common::seed_asset(&pool, "LT-001", "ThinkPad", laptop).await;
    let employee = common::seed_employee(&pool, "alex@example.com").await;
    common::seed_check_out(&pool, asset, employee).await;

    // "BROKEN" is not a valid asset status; deserialization fails.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/operations/check-in",
        serde_json::json!({
            "asset_id": asset,
            "employee_id": employee,
            "new_status": "BROKEN",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
