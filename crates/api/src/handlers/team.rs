//! Handlers for team members and partners.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reel_core::error::CoreError;
use reel_core::storage::{removed_paths, BUCKET_TEAM};
use reel_core::team::{validate_member_type, MEMBER_TYPE_TEAM};
use reel_core::types::DbId;
use reel_db::models::team_member::{SaveTeamMember, TeamListParams, TeamMember};
use reel_db::repositories::TeamMemberRepo;
use serde::Serialize;
use validator::Validate;

use crate::cleanup::remove_orphans;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// A team member with the public URL of their photo.
#[derive(Debug, Serialize)]
pub struct TeamMemberView {
    #[serde(flatten)]
    pub member: TeamMember,
    pub photo_url: Option<String>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "TeamMember",
        id,
    })
}

/// Validate the DTO and fill in the default member type.
fn prepare(input: &mut SaveTeamMember) -> AppResult<()> {
    input.validate()?;
    let member_type = input
        .member_type
        .get_or_insert_with(|| MEMBER_TYPE_TEAM.to_string());
    validate_member_type(member_type)?;
    Ok(())
}

/// GET /api/v1/team
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TeamListParams>,
) -> AppResult<Json<DataResponse<Vec<TeamMemberView>>>> {
    if let Some(member_type) = params.member_type.as_deref() {
        validate_member_type(member_type)?;
    }
    let members = TeamMemberRepo::list(&state.pool, params.member_type.as_deref()).await?;
    let data = members
        .into_iter()
        .map(|member| {
            let photo_url = member
                .image_paths()
                .first()
                .map(|p| state.storage.public_url(BUCKET_TEAM, p));
            TeamMemberView { member, photo_url }
        })
        .collect();
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/admin/team
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<SaveTeamMember>,
) -> AppResult<(StatusCode, Json<DataResponse<TeamMember>>)> {
    prepare(&mut input)?;
    let member = TeamMemberRepo::create(&state.pool, &input).await?;
    tracing::info!(member_id = member.id, user_id = admin.user_id, "Team member created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// PUT /api/v1/admin/team/{id}
///
/// A replaced or cleared photo is removed from storage after the update.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<SaveTeamMember>,
) -> AppResult<Json<DataResponse<TeamMember>>> {
    prepare(&mut input)?;

    let previous = TeamMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let member = TeamMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(member_id = id, user_id = admin.user_id, "Team member updated");

    let orphans = removed_paths(previous.image_paths(), member.image_paths());
    remove_orphans(state.storage.as_ref(), BUCKET_TEAM, orphans, "TeamMember", id).await;

    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/v1/admin/team/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let member = TeamMemberRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(member_id = id, user_id = admin.user_id, "Team member deleted");

    let orphans = removed_paths(member.image_paths(), []);
    remove_orphans(state.storage.as_ref(), BUCKET_TEAM, orphans, "TeamMember", id).await;

    Ok(StatusCode::NO_CONTENT)
}
