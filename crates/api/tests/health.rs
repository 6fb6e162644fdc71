mod common;

use axum::http::StatusCode;
use common::{app_with_storage, expect_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_database(pool: PgPool) {
    let (app, _storage) = app_with_storage(pool);
    let json = expect_json(get(app, "/health", None).await, StatusCode::OK).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn responses_carry_a_request_id(pool: PgPool) {
    let (app, _storage) = app_with_storage(pool);
    let response = get(app, "/api/v1/categories", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}
