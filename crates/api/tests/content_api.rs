//! HTTP tests for team members, feature cards, settings and image uploads.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{
    admin_cookie, app_with_storage, empty_request, expect_json, get, json_request, send,
};
use reel_db::repositories::TeamMemberRepo;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

fn member(name: &str, photo: Option<&str>, member_type: Option<&str>) -> serde_json::Value {
    json!({
        "name": name,
        "role": "Director of Photography",
        "bio": "Shoots things.",
        "photo_path": photo,
        "member_type": member_type,
        "instagram_url": "https://instagram.com/example",
    })
}

async fn create_member(app: axum::Router, cookie: &str, body: serde_json::Value) -> i64 {
    let response =
        json_request(app, Method::POST, "/api/v1/admin/team", body, Some(cookie)).await;
    let json = expect_json(response, StatusCode::CREATED).await;
    json["data"]["id"].as_i64().expect("id should be a number")
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn team_defaults_and_type_filter(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let (app, _storage) = app_with_storage(pool);

    let response = json_request(
        app.clone(),
        Method::POST,
        "/api/v1/admin/team",
        member("Ana", Some("ana.jpg"), None),
        Some(&cookie),
    )
    .await;
    let json = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["member_type"], "team");

    create_member(app.clone(), &cookie, member("Studio X", None, Some("partner"))).await;

    let response = get(app.clone(), "/api/v1/team?type=partner", None).await;
    let json = expect_json(response, StatusCode::OK).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Studio X");
    assert!(data[0]["photo_url"].is_null());

    let response = get(app.clone(), "/api/v1/team?type=team", None).await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"][0]["photo_url"], "memory://team/ana.jpg");

    let response = get(app, "/api/v1/team?type=client", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn team_photo_replacement_and_delete_clean_up(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let (app, storage) = app_with_storage(pool.clone());

    let id = create_member(app.clone(), &cookie, member("Ana", Some("old.jpg"), None)).await;

    let response = json_request(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/admin/team/{id}"),
        member("Ana", Some("new.jpg"), None),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        storage.removed(),
        vec![("team".to_string(), "old.jpg".to_string())]
    );
    let stored = TeamMemberRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.photo_path.as_deref(), Some("new.jpg"));

    let response = empty_request(
        app,
        Method::DELETE,
        &format!("/api/v1/admin/team/{id}"),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(storage.removed().last().unwrap().1, "new.jpg");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn team_update_survives_storage_outage(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let (app, storage) = app_with_storage(pool.clone());

    let id = create_member(app.clone(), &cookie, member("Ana", Some("old.jpg"), None)).await;
    storage.set_fail_removals(true);

    let response = json_request(
        app,
        Method::PUT,
        &format!("/api/v1/admin/team/{id}"),
        member("Ana", None, None),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let stored = TeamMemberRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.photo_path, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn team_photo_outside_the_bucket_is_a_field_error(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let (app, _storage) = app_with_storage(pool.clone());

    let response = json_request(
        app,
        Method::POST,
        "/api/v1/admin/team",
        member("Ana", Some("../../etc/passwd"), None),
        Some(&cookie),
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["photo_path"].is_array());
    assert!(TeamMemberRepo::list(&pool, None).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Features
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn features_by_page(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let (app, _storage) = app_with_storage(pool);

    let card = |title: &str, page: &str, order: i32| {
        json!({
            "title": title,
            "description": "Text",
            "icon": "drone",
            "page": page,
            "sort_order": order,
        })
    };
    for (title, page, order) in [("B", "home", 2), ("A", "home", 1), ("C", "drone", 1)] {
        let response = json_request(
            app.clone(),
            Method::POST,
            "/api/v1/admin/features",
            card(title, page, order),
            Some(&cookie),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app.clone(), "/api/v1/features?page=home", None).await;
    let json = expect_json(response, StatusCode::OK).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["A", "B"]);

    let response = json_request(
        app.clone(),
        Method::POST,
        "/api/v1/admin/features",
        card("D", "blog", 1),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = empty_request(
        app,
        Method::DELETE,
        "/api/v1/admin/features/9999",
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn settings_upsert_and_read_as_map(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let (app, _storage) = app_with_storage(pool);

    for value in [json!("First"), json!("Second")] {
        let response = json_request(
            app.clone(),
            Method::PUT,
            "/api/v1/admin/settings/hero_title",
            json!({ "value": value }),
            Some(&cookie),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    json_request(
        app.clone(),
        Method::PUT,
        "/api/v1/admin/settings/social",
        json!({ "value": { "instagram": "https://instagram.com/reel" } }),
        Some(&cookie),
    )
    .await;

    let json = expect_json(get(app.clone(), "/api/v1/settings", None).await, StatusCode::OK).await;
    assert_eq!(json["data"]["hero_title"], "Second");
    assert_eq!(json["data"]["social"]["instagram"], "https://instagram.com/reel");

    let response = json_request(
        app,
        Method::PUT,
        "/api/v1/admin/settings/Bad%20Key",
        json!({ "value": 1 }),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Uploads
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "reel-test-boundary";

fn multipart_request(uri: &str, cookie: &str, filename: &str, data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_stores_under_random_path(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let (app, storage) = app_with_storage(pool);

    let request = multipart_request(
        "/api/v1/admin/uploads/portfolio",
        &cookie,
        "Shot.PNG",
        b"\x89PNG",
    );
    let json = expect_json(send(app, request).await, StatusCode::CREATED).await;
    let path = json["data"]["path"].as_str().unwrap();
    assert!(path.ends_with(".png"));
    assert!(!path.contains("Shot"));
    assert_eq!(json["data"]["url"], format!("memory://portfolio/{path}"));
    assert!(storage.contains("portfolio", path));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_rejects_bad_bucket_and_extension(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let (app, storage) = app_with_storage(pool);

    let request = multipart_request("/api/v1/admin/uploads/avatars", &cookie, "a.png", b"x");
    let response = send(app.clone(), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = multipart_request("/api/v1/admin/uploads/team", &cookie, "clip.mp4", b"x");
    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(storage.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_requires_admin(pool: PgPool) {
    let (app, storage) = app_with_storage(pool);
    let request = multipart_request(
        "/api/v1/admin/uploads/team",
        "reel_session=nope",
        "a.png",
        b"x",
    );
    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(storage.is_empty());
}
