//! Repository for the `categories` table.
//!
//! Categories are referenced by name inside `projects.category`, so renames
//! and reference counts scan project tag strings instead of following a
//! foreign key.

use reel_core::tags::{contains_tag, rename_tag};
use reel_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::category::{Category, RenameOutcome};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Rename a category and rewrite every project tag string that carries
    /// the old name as a whole label. Runs in a single transaction.
    ///
    /// Returns `None` if no category with the given `id` exists.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        new_name: &str,
    ) -> Result<Option<RenameOutcome>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let old_name: Option<(String,)> =
            sqlx::query_as("SELECT name FROM categories WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((old_name,)) = old_name else {
            return Ok(None);
        };

        let query = format!("UPDATE categories SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(new_name)
            .fetch_one(&mut *tx)
            .await?;

        let mut projects_updated = 0;
        if old_name != new_name {
            for (project_id, tags) in tagged_candidates(&mut tx, &old_name, true).await? {
                if let Some(rewritten) = rename_tag(&tags, &old_name, new_name) {
                    sqlx::query("UPDATE projects SET category = $2 WHERE id = $1")
                        .bind(project_id)
                        .bind(&rewritten)
                        .execute(&mut *tx)
                        .await?;
                    projects_updated += 1;
                }
            }
        }

        tx.commit().await?;

        tracing::debug!(
            category_id = id,
            old_name = %old_name,
            new_name = %new_name,
            projects_updated,
            "Category renamed",
        );

        Ok(Some(RenameOutcome {
            category,
            projects_updated,
        }))
    }

    /// Count projects whose tag string carries `name` as a whole label.
    pub async fn count_projects_using(pool: &PgPool, name: &str) -> Result<i64, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let candidates = tagged_candidates(&mut conn, name, false).await?;
        let count = candidates
            .iter()
            .filter(|(_, tags)| contains_tag(tags, name))
            .count();
        Ok(count as i64)
    }

    /// Delete a category by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Projects whose tag string contains `name` anywhere, substring matches
/// included. Callers narrow the result to whole-label matches.
async fn tagged_candidates(
    conn: &mut PgConnection,
    name: &str,
    lock: bool,
) -> Result<Vec<(DbId, String)>, sqlx::Error> {
    let query = if lock {
        "SELECT id, category FROM projects WHERE strpos(category, $1) > 0 ORDER BY id FOR UPDATE"
    } else {
        "SELECT id, category FROM projects WHERE strpos(category, $1) > 0 ORDER BY id"
    };
    sqlx::query_as::<_, (DbId, String)>(query)
        .bind(name)
        .fetch_all(conn)
        .await
}
