//! Repository for the `profiles` table (role lookup).

use reel_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::Profile;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "user_id, role, full_name, created_at, updated_at";

/// Provides role lookups and assignment.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find the profile for a user. `None` means the user has no role.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Create or replace the role of a user.
    pub async fn upsert_role(
        pool: &PgPool,
        user_id: DbId,
        role: &str,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (user_id, role) VALUES ($1, $2)
             ON CONFLICT (user_id) DO UPDATE SET role = EXCLUDED.role
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(role)
            .fetch_one(pool)
            .await
    }
}
