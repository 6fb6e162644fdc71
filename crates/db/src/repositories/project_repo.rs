//! Repository for the `projects` table.

use reel_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::project::{Project, SaveProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, media_link, description, drone_description, post_description, \
                       details, client_name, client_site, category, project_date, cover_image, \
                       gallery, created_at, updated_at";

/// Whole-label match of `$1` against the comma-joined `category` column.
const CATEGORY_MATCH: &str =
    "$1 = ANY(SELECT btrim(label) FROM unnest(string_to_array(category, ',')) AS label)";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `input.category` is stored as given; callers normalise it first.
    pub async fn create(pool: &PgPool, input: &SaveProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, media_link, description, drone_description, post_description, details,
                 client_name, client_site, category, project_date, cover_image, gallery)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.media_link)
            .bind(&input.description)
            .bind(&input.drone_description)
            .bind(&input.post_description)
            .bind(Json(&input.details))
            .bind(&input.client_name)
            .bind(&input.client_site)
            .bind(&input.category)
            .bind(input.project_date)
            .bind(&input.cover_image)
            .bind(&input.gallery)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects, newest project date first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             ORDER BY project_date DESC NULLS LAST, created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List projects carrying `category` as one of their tag labels.
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE {CATEGORY_MATCH}
             ORDER BY project_date DESC NULLS LAST, created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(category)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Replace every field of a project with the submitted form.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = $2,
                media_link = $3,
                description = $4,
                drone_description = $5,
                post_description = $6,
                details = $7,
                client_name = $8,
                client_site = $9,
                category = $10,
                project_date = $11,
                cover_image = $12,
                gallery = $13
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.media_link)
            .bind(&input.description)
            .bind(&input.drone_description)
            .bind(&input.post_description)
            .bind(Json(&input.details))
            .bind(&input.client_name)
            .bind(&input.client_site)
            .bind(&input.category)
            .bind(input.project_date)
            .bind(&input.cover_image)
            .bind(&input.gallery)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project, returning the removed row so its images can be
    /// cleaned up. Returns `None` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("DELETE FROM projects WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
