//! Handlers for portfolio projects (public listing and admin saves).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reel_core::error::CoreError;
use reel_core::media::embed_url;
use reel_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use reel_core::storage::{removed_paths, BUCKET_PORTFOLIO};
use reel_core::tags::normalize_tags;
use reel_core::types::DbId;
use reel_db::models::project::{Project, ProjectListParams, SaveProject};
use reel_db::repositories::ProjectRepo;
use reel_storage::ObjectStorage;
use serde::Serialize;
use validator::Validate;

use crate::cleanup::remove_orphans;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Public URLs for one before/after pair.
#[derive(Debug, Serialize)]
pub struct DetailUrls {
    pub label: Option<String>,
    pub before_url: String,
    pub after_url: String,
}

/// A project as served to the public site: the row plus resolved URLs.
#[derive(Debug, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    /// Embeddable player URL derived from `media_link`, if recognised.
    pub embed_url: Option<String>,
    pub cover_url: Option<String>,
    pub gallery_urls: Vec<String>,
    pub detail_urls: Vec<DetailUrls>,
}

impl ProjectView {
    fn new(project: Project, storage: &dyn ObjectStorage) -> Self {
        let url = |path: &str| storage.public_url(BUCKET_PORTFOLIO, path);
        let embed_url = project.media_link.as_deref().and_then(embed_url);
        let cover_url = project
            .cover_image
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(url);
        let gallery_urls = project
            .gallery
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| url(p))
            .collect();
        let detail_urls = project
            .details
            .0
            .iter()
            .map(|pair| DetailUrls {
                label: pair.label.clone(),
                before_url: url(&pair.before),
                after_url: url(&pair.after),
            })
            .collect();
        Self {
            project,
            embed_url,
            cover_url,
            gallery_urls,
            detail_urls,
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/projects
///
/// `?category=` filters on whole tag labels, so `Drone` does not match a
/// project tagged only `Drone Racing`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<DataResponse<Vec<ProjectView>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let projects = match params.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => {
            ProjectRepo::list_by_category(&state.pool, category, limit, offset).await?
        }
        _ => ProjectRepo::list(&state.pool, limit, offset).await?,
    };

    let data = projects
        .into_iter()
        .map(|p| ProjectView::new(p, state.storage.as_ref()))
        .collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectView>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: ProjectView::new(project, state.storage.as_ref()),
    }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/projects
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<SaveProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    input.validate()?;
    input.category = normalize_tags(&input.category);

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, user_id = admin.user_id, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PUT /api/v1/admin/projects/{id}
///
/// Replaces every field. Image paths the previous version referenced and the
/// new one does not are removed from storage after the update commits.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<SaveProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    input.validate()?;
    input.category = normalize_tags(&input.category);

    let previous = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, user_id = admin.user_id, "Project updated");

    let orphans = removed_paths(previous.image_paths(), project.image_paths());
    remove_orphans(state.storage.as_ref(), BUCKET_PORTFOLIO, orphans, "Project", id).await;

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let project = ProjectRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, user_id = admin.user_id, "Project deleted");

    let orphans = removed_paths(project.image_paths(), []);
    remove_orphans(state.storage.as_ref(), BUCKET_PORTFOLIO, orphans, "Project", id).await;

    Ok(StatusCode::NO_CONTENT)
}
