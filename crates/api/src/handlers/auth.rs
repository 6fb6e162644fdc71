//! Handlers for the `/auth` resource (login, logout, session).

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use axum_extra::extract::CookieJar;
use chrono::Utc;
use reel_core::error::CoreError;
use reel_core::types::{DbId, Timestamp};
use reel_db::models::session::CreateSession;
use reel_db::repositories::{ProfileRepo, SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::password::verify_password;
use crate::auth::session::{
    build_cookie, generate_session_token, hash_session_token, removal_cookie, SESSION_COOKIE,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::gate::GatePass;
use crate::response::DataResponse;
use crate::state::AppState;

/// Same message for unknown email and wrong password.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public user info.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
}

/// The signed-in user and their profile role (`None` without a profile).
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub user: UserInfo,
    pub role: Option<String>,
    pub expires_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Requires the admin gate cookie. Sets the `reel_session` cookie.
pub async fn login(
    _gate: GatePass,
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<DataResponse<SessionInfo>>)> {
    input.validate()?;

    let invalid = || AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));

    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(user_id = user.id, "Failed login attempt");
        return Err(invalid());
    }

    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::hours(state.config.session.expiry_hours);
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.chars().take(255).collect());

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            token_hash,
            expires_at,
            user_agent,
        },
    )
    .await?;

    let role = ProfileRepo::find_by_user_id(&state.pool, user.id)
        .await?
        .map(|p| p.role);
    tracing::info!(user_id = user.id, role = ?role, "User signed in");

    let jar = jar.add(build_cookie(
        SESSION_COOKIE,
        token,
        state.config.session.cookie_secure,
    ));

    Ok((
        jar,
        Json(DataResponse {
            data: SessionInfo {
                user: UserInfo {
                    id: user.id,
                    email: user.email,
                },
                role,
                expires_at,
            },
        }),
    ))
}

/// POST /api/v1/auth/logout
///
/// Revokes the presented session, if any, and clears the cookie. Always 204.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, StatusCode)> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let hash = hash_session_token(cookie.value());
        if let Some(session) = SessionRepo::find_active_by_token_hash(&state.pool, &hash).await? {
            SessionRepo::revoke(&state.pool, session.id).await?;
            tracing::info!(user_id = session.user_id, session_id = session.id, "User signed out");
        }
    }
    Ok((jar.remove(removal_cookie(SESSION_COOKIE)), StatusCode::NO_CONTENT))
}

/// GET /api/v1/auth/session
pub async fn session(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SessionInfo>>> {
    let account = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;
    let role = ProfileRepo::find_by_user_id(&state.pool, user.user_id)
        .await?
        .map(|p| p.role);

    Ok(Json(DataResponse {
        data: SessionInfo {
            user: UserInfo {
                id: account.id,
                email: account.email,
            },
            role,
            expires_at: user.expires_at,
        },
    }))
}
