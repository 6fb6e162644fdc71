//! HTTP tests for categories: create, rename with retagging, guarded delete.

mod common;

use axum::http::{Method, StatusCode};
use common::{admin_cookie, app_with_storage, empty_request, expect_json, get, json_request};
use reel_db::models::project::SaveProject;
use reel_db::repositories::{CategoryRepo, ProjectRepo};
use serde_json::json;
use sqlx::PgPool;

async fn tagged_project(pool: &PgPool, title: &str, category: &str) -> i64 {
    let input: SaveProject =
        serde_json::from_value(common::project_body(title, category)).unwrap();
    ProjectRepo::create(pool, &input).await.unwrap().id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_list(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let (app, _storage) = app_with_storage(pool);

    let response = json_request(
        app.clone(),
        Method::POST,
        "/api/v1/admin/categories",
        json!({ "name": "  Weddings " }),
        Some(&cookie),
    )
    .await;
    let json = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["name"], "Weddings");

    let json = expect_json(get(app, "/api/v1/categories", None).await, StatusCode::OK).await;
    assert_eq!(json["data"][0]["name"], "Weddings");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_name_is_conflict(pool: PgPool) {
    CategoryRepo::create(&pool, "Drone").await.unwrap();
    let cookie = admin_cookie(&pool).await;
    let (app, _storage) = app_with_storage(pool);

    let response = json_request(
        app,
        Method::POST,
        "/api/v1/admin/categories",
        json!({ "name": "Drone" }),
        Some(&cookie),
    )
    .await;
    let json = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn comma_in_name_is_a_field_error(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let (app, _storage) = app_with_storage(pool);

    let response = json_request(
        app,
        Method::POST,
        "/api/v1/admin/categories",
        json!({ "name": "Drone, Aerial" }),
        Some(&cookie),
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["fields"]["name"][0], "Name must not contain commas");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rename_retags_exact_labels_only(pool: PgPool) {
    let category = CategoryRepo::create(&pool, "Drone").await.unwrap();
    let exact = tagged_project(&pool, "Exact", "Drone, Events").await;
    let substring = tagged_project(&pool, "Substring", "Drone Racing").await;
    let cookie = admin_cookie(&pool).await;
    let (app, _storage) = app_with_storage(pool.clone());

    let response = json_request(
        app,
        Method::PUT,
        &format!("/api/v1/admin/categories/{}", category.id),
        json!({ "name": "Aerial" }),
        Some(&cookie),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["category"]["name"], "Aerial");
    assert_eq!(json["data"]["projects_updated"], 1);

    let exact = ProjectRepo::find_by_id(&pool, exact).await.unwrap().unwrap();
    assert_eq!(exact.category, "Aerial, Events");
    let substring = ProjectRepo::find_by_id(&pool, substring).await.unwrap().unwrap();
    assert_eq!(substring.category, "Drone Racing");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rename_missing_category_is_404(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let (app, _storage) = app_with_storage(pool);

    let response = json_request(
        app,
        Method::PUT,
        "/api/v1/admin/categories/4242",
        json!({ "name": "Aerial" }),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_in_use_category_reports_count(pool: PgPool) {
    let category = CategoryRepo::create(&pool, "Drone").await.unwrap();
    tagged_project(&pool, "One", "Drone").await;
    tagged_project(&pool, "Two", "Events, Drone").await;
    tagged_project(&pool, "Unrelated", "Drone Racing").await;
    let cookie = admin_cookie(&pool).await;
    let (app, _storage) = app_with_storage(pool.clone());

    let response = empty_request(
        app,
        Method::DELETE,
        &format!("/api/v1/admin/categories/{}", category.id),
        Some(&cookie),
    )
    .await;
    let json = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "IN_USE");
    assert_eq!(json["count"], 2);
    assert!(CategoryRepo::find_by_id(&pool, category.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_unused_category(pool: PgPool) {
    let category = CategoryRepo::create(&pool, "Drone").await.unwrap();
    tagged_project(&pool, "Race", "Drone Racing").await;
    let cookie = admin_cookie(&pool).await;
    let (app, _storage) = app_with_storage(pool.clone());

    let response = empty_request(
        app,
        Method::DELETE,
        &format!("/api/v1/admin/categories/{}", category.id),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(CategoryRepo::find_by_id(&pool, category.id).await.unwrap().is_none());
}
