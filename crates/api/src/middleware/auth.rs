//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use reel_core::error::CoreError;
use reel_core::types::{DbId, Timestamp};
use reel_db::repositories::SessionRepo;

use crate::auth::session::{hash_session_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the `reel_session` cookie.
///
/// The cookie token is hashed and must match a session row that is neither
/// revoked nor expired.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    /// The session row backing this request.
    pub session_id: DbId,
    /// When the backing session expires.
    pub expires_at: Timestamp,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not signed in".into())))?;

        let hash = hash_session_token(&token);
        let session = SessionRepo::find_active_by_token_hash(&state.pool, &hash)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Session is invalid or has expired".into(),
                ))
            })?;

        Ok(AuthUser {
            user_id: session.user_id,
            session_id: session.id,
            expires_at: session.expires_at,
        })
    }
}
