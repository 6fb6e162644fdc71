//! Role checks layered on top of [`AuthUser`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use reel_core::error::CoreError;
use reel_core::roles::ROLE_ADMIN;
use reel_db::repositories::ProfileRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a session whose user has an `admin` profile.
///
/// Fails closed: no session is 401, a missing profile or any other role is
/// 403. Declare it before any body extractor so a rejected request never
/// reaches the handler.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        let profile = ProfileRepo::find_by_user_id(&state.pool, user.user_id).await?;
        match profile {
            Some(p) if p.role == ROLE_ADMIN => Ok(RequireAdmin(user)),
            Some(_) => {
                tracing::warn!(user_id = user.user_id, "Non-admin attempted an admin action");
                Err(AppError::Core(CoreError::Forbidden(
                    "Admin role required".into(),
                )))
            }
            None => {
                tracing::warn!(
                    user_id = user.user_id,
                    "User without profile attempted an admin action"
                );
                Err(AppError::Core(CoreError::Forbidden(
                    "Admin role required".into(),
                )))
            }
        }
    }
}
