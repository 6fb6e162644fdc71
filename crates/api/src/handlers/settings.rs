//! Handlers for site settings (a flat key/value map).

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use reel_core::settings::validate_setting_key;
use reel_db::models::setting::{SaveSetting, Setting};
use reel_db::repositories::SettingRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<BTreeMap<String, serde_json::Value>>>> {
    let settings = SettingRepo::list(&state.pool).await?;
    let data = settings.into_iter().map(|s| (s.key, s.value)).collect();
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/admin/settings/{key}
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<SaveSetting>,
) -> AppResult<Json<DataResponse<Setting>>> {
    validate_setting_key(&key)?;
    let setting = SettingRepo::upsert(&state.pool, &key, &input.value).await?;
    tracing::info!(key = %setting.key, user_id = admin.user_id, "Setting saved");
    Ok(Json(DataResponse { data: setting }))
}
