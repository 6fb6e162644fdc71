//! Handlers for categories.
//!
//! Categories are free-text labels. Projects reference them by name inside a
//! comma-joined tag string, so renames rewrite those strings and deletes are
//! refused while any project still carries the label.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use reel_core::error::CoreError;
use reel_core::types::DbId;
use reel_db::models::category::{Category, RenameOutcome, SaveCategory};
use reel_db::repositories::CategoryRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/admin/categories
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<SaveCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    input.name = input.name.trim().to_string();
    input.validate()?;

    let category = CategoryRepo::create(&state.pool, &input.name).await?;
    tracing::info!(
        category_id = category.id,
        name = %category.name,
        user_id = admin.user_id,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /api/v1/admin/categories/{id}
///
/// Renames the category and retags every project carrying the old name as a
/// whole label, in one transaction.
pub async fn rename(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<SaveCategory>,
) -> AppResult<Json<DataResponse<RenameOutcome>>> {
    input.name = input.name.trim().to_string();
    input.validate()?;

    let outcome = CategoryRepo::rename(&state.pool, id, &input.name)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(
        category_id = id,
        name = %outcome.category.name,
        projects_updated = outcome.projects_updated,
        user_id = admin.user_id,
        "Category renamed",
    );

    Ok(Json(DataResponse { data: outcome }))
}

/// DELETE /api/v1/admin/categories/{id}
///
/// 409 `IN_USE` with the number of referencing projects while the label is
/// still in use.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let count = CategoryRepo::count_projects_using(&state.pool, &category.name).await?;
    if count > 0 {
        return Err(AppError::Core(CoreError::InUse {
            entity: "Category",
            name: category.name,
            count,
        }));
    }

    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(
        category_id = id,
        name = %category.name,
        user_id = admin.user_id,
        "Category deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}
