//! Handlers for feature cards.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reel_core::error::CoreError;
use reel_core::features::validate_page;
use reel_core::types::DbId;
use reel_db::models::feature::{Feature, FeatureListParams, SaveFeature};
use reel_db::repositories::FeatureRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Feature",
        id,
    })
}

/// GET /api/v1/features
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FeatureListParams>,
) -> AppResult<Json<DataResponse<Vec<Feature>>>> {
    if let Some(page) = params.page.as_deref() {
        validate_page(page)?;
    }
    let features = FeatureRepo::list(&state.pool, params.page.as_deref()).await?;
    Ok(Json(DataResponse { data: features }))
}

/// POST /api/v1/admin/features
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SaveFeature>,
) -> AppResult<(StatusCode, Json<DataResponse<Feature>>)> {
    input.validate()?;
    validate_page(&input.page)?;

    let feature = FeatureRepo::create(&state.pool, &input).await?;
    tracing::info!(feature_id = feature.id, user_id = admin.user_id, "Feature created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: feature })))
}

/// PUT /api/v1/admin/features/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SaveFeature>,
) -> AppResult<Json<DataResponse<Feature>>> {
    input.validate()?;
    validate_page(&input.page)?;

    let feature = FeatureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(feature_id = id, user_id = admin.user_id, "Feature updated");
    Ok(Json(DataResponse { data: feature }))
}

/// DELETE /api/v1/admin/features/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !FeatureRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(feature_id = id, user_id = admin.user_id, "Feature deleted");
    Ok(StatusCode::NO_CONTENT)
}
