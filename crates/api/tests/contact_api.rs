//! HTTP tests for the contact form and the admin inbox.

mod common;

use axum::http::{Method, StatusCode};
use common::{admin_cookie, app_with_storage, empty_request, expect_json, get, json_request};
use reel_db::repositories::MessageRepo;
use serde_json::json;
use sqlx::PgPool;

fn contact(body: &str) -> serde_json::Value {
    json!({
        "name": "Marta",
        "email": "marta@example.com",
        "subject": "drone",
        "body": body,
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn short_body_is_a_field_error(pool: PgPool) {
    let (app, _storage) = app_with_storage(pool.clone());

    let response =
        json_request(app, Method::POST, "/api/v1/contact", contact("Too short"), None).await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["body"][0].as_str().unwrap().contains("10"));
    assert!(json["fields"].get("email").is_none());
    assert_eq!(MessageRepo::counts(&pool).await.unwrap(), (0, 0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn padding_does_not_count_towards_length(pool: PgPool) {
    let (app, _storage) = app_with_storage(pool);
    let body = contact("   short    ");
    let response = json_request(app, Method::POST, "/api/v1/contact", body, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bad_email_and_subject_are_reported(pool: PgPool) {
    let (app, _storage) = app_with_storage(pool);
    let mut body = contact("I would like a quote for a wedding.");
    body["email"] = json!("nope");
    body["subject"] = json!("spam");

    let response = json_request(app, Method::POST, "/api/v1/contact", body, None).await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert!(json["fields"]["email"].is_array());
    assert!(json["fields"]["subject"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn valid_message_reaches_the_inbox(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let (app, _storage) = app_with_storage(pool.clone());

    let response = json_request(
        app.clone(),
        Method::POST,
        "/api/v1/contact",
        contact("I would like a quote for a wedding."),
        None,
    )
    .await;
    let json = expect_json(response, StatusCode::CREATED).await;
    let id = json["data"]["id"].as_i64().unwrap();

    let response = get(app.clone(), "/api/v1/admin/messages", Some(&cookie)).await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["unread"], 1);
    assert_eq!(json["data"]["items"][0]["subject"], "drone");

    let response = empty_request(
        app.clone(),
        Method::PATCH,
        &format!("/api/v1/admin/messages/{id}/read"),
        Some(&cookie),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["is_read"], true);
    assert_eq!(MessageRepo::counts(&pool).await.unwrap(), (1, 0));

    let response = empty_request(
        app.clone(),
        Method::DELETE,
        &format!("/api/v1/admin/messages/{id}"),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = empty_request(
        app,
        Method::PATCH,
        &format!("/api/v1/admin/messages/{id}/read"),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
