//! Repository for the `features` table.

use reel_core::types::DbId;
use sqlx::PgPool;

use crate::models::feature::{Feature, SaveFeature};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, icon, page, sort_order, created_at, updated_at";

/// Provides CRUD operations for feature cards.
pub struct FeatureRepo;

impl FeatureRepo {
    /// Insert a new feature, returning the created row.
    pub async fn create(pool: &PgPool, input: &SaveFeature) -> Result<Feature, sqlx::Error> {
        let query = format!(
            "INSERT INTO features (title, description, icon, page, sort_order)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.page)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List features, optionally restricted to one page context.
    pub async fn list(pool: &PgPool, page: Option<&str>) -> Result<Vec<Feature>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM features
             WHERE ($1::TEXT IS NULL OR page = $1)
             ORDER BY page ASC, sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(page)
            .fetch_all(pool)
            .await
    }

    /// Replace every field of a feature. Returns `None` if absent.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveFeature,
    ) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!(
            "UPDATE features SET
                title = $2,
                description = $3,
                icon = $4,
                page = $5,
                sort_order = COALESCE($6, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.page)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a feature by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM features WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
