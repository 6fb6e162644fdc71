#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use reel_api::auth::password::hash_password;
use reel_api::auth::session::{generate_session_token, GATE_COOKIE, SESSION_COOKIE};
use reel_api::config::{GateConfig, ServerConfig, SessionConfig, StorageConfig};
use reel_api::router::build_app_router;
use reel_api::state::AppState;
use reel_core::roles::{ROLE_ADMIN, ROLE_VIEWER};
use reel_core::types::DbId;
use reel_db::models::session::CreateSession;
use reel_db::models::user::{CreateUser, User};
use reel_db::repositories::{ProfileRepo, SessionRepo, UserRepo};
use reel_storage::MemoryStorage;

pub const TEST_SECRET: &str = "test-session-secret";
pub const TEST_GATE_CODE: &str = "4821";
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults and in-memory storage.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session: SessionConfig {
            secret: TEST_SECRET.to_string(),
            expiry_hours: 168,
            cookie_secure: false,
        },
        gate: GateConfig {
            code: TEST_GATE_CODE.to_string(),
            ttl_minutes: 15,
        },
        max_upload_bytes: 1024 * 1024,
        storage: StorageConfig::Memory,
    }
}

/// Build the full application router around `pool` and `storage`.
///
/// Uses the same [`build_app_router`] as `main.rs`, so the middleware stack
/// under test is the production one.
pub fn build_test_app(pool: PgPool, storage: Arc<MemoryStorage>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
    };
    build_app_router(state, &config)
}

/// Convenience: a fresh app with its own memory storage.
pub fn app_with_storage(pool: PgPool) -> (Router, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (build_test_app(pool, Arc::clone(&storage)), storage)
}

// ---------------------------------------------------------------------------
// Users and cookies
// ---------------------------------------------------------------------------

/// Create a user with [`TEST_PASSWORD`] and, optionally, a profile role.
pub async fn create_user(pool: &PgPool, email: &str, role: Option<&str>) -> User {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        },
    )
    .await
    .expect("user creation should succeed");
    if let Some(role) = role {
        ProfileRepo::upsert_role(pool, user.id, role)
            .await
            .expect("profile creation should succeed");
    }
    user
}

/// Insert a live session for `user_id` and return its `Cookie` header value.
pub async fn session_cookie(pool: &PgPool, user_id: DbId) -> String {
    let (token, token_hash) = generate_session_token();
    SessionRepo::create(
        pool,
        &CreateSession {
            user_id,
            token_hash,
            expires_at: chrono::Utc::now() + chrono::Duration::hours(1),
            user_agent: None,
        },
    )
    .await
    .expect("session creation should succeed");
    format!("{SESSION_COOKIE}={token}")
}

/// Cookie header for a signed-in admin.
pub async fn admin_cookie(pool: &PgPool) -> String {
    let user = create_user(pool, "admin@reel.test", Some(ROLE_ADMIN)).await;
    session_cookie(pool, user.id).await
}

/// Cookie header for a signed-in user whose profile is not admin.
pub async fn viewer_cookie(pool: &PgPool) -> String {
    let user = create_user(pool, "viewer@reel.test", Some(ROLE_VIEWER)).await;
    session_cookie(pool, user.id).await
}

/// A valid gate cookie header value.
pub fn gate_cookie() -> String {
    let token = reel_core::gate::issue_token(TEST_SECRET, chrono::Utc::now().timestamp(), 15);
    format!("{GATE_COOKIE}={token}")
}

/// Value of the `name` cookie set by `response`, if any.
pub fn set_cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| {
            let pair = v.split(';').next()?.trim();
            let (k, value) = pair.split_once('=')?;
            (k == name).then(|| value.to_string())
        })
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Send a request through the app.
pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

/// GET with an optional `Cookie` header.
pub async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// Send a JSON body with an optional `Cookie` header.
pub async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// A body-less request (DELETE, PATCH) with an optional `Cookie` header.
pub async fn empty_request(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Assert a status and return the JSON body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A minimal valid project form.
pub fn project_body(title: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "A short film.",
        "category": category,
        "media_link": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "cover_image": null,
        "gallery": [],
        "details": []
    })
}
