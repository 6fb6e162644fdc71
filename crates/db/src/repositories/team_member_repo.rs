//! Repository for the `team_members` table.

use reel_core::team::MEMBER_TYPE_TEAM;
use reel_core::types::DbId;
use sqlx::PgPool;

use crate::models::team_member::{SaveTeamMember, TeamMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, role, company, bio, photo_path, instagram_url, linkedin_url, \
                       website_url, member_type, sort_order, created_at, updated_at";

/// Provides CRUD operations for team members and partners.
pub struct TeamMemberRepo;

impl TeamMemberRepo {
    /// Insert a new team member, returning the created row.
    ///
    /// `member_type` defaults to `"team"` and `sort_order` to 0.
    pub async fn create(pool: &PgPool, input: &SaveTeamMember) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team_members
                (name, role, company, bio, photo_path, instagram_url, linkedin_url,
                 website_url, member_type, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.company)
            .bind(&input.bio)
            .bind(&input.photo_path)
            .bind(&input.instagram_url)
            .bind(&input.linkedin_url)
            .bind(&input.website_url)
            .bind(input.member_type.as_deref().unwrap_or(MEMBER_TYPE_TEAM))
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a team member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = $1");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List members ordered by `sort_order`, optionally filtered by type.
    pub async fn list(
        pool: &PgPool,
        member_type: Option<&str>,
    ) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM team_members
             WHERE ($1::TEXT IS NULL OR member_type = $1)
             ORDER BY sort_order ASC, name ASC"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(member_type)
            .fetch_all(pool)
            .await
    }

    /// Replace every field of a team member with the submitted form.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SaveTeamMember,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE team_members SET
                name = $2,
                role = $3,
                company = $4,
                bio = $5,
                photo_path = $6,
                instagram_url = $7,
                linkedin_url = $8,
                website_url = $9,
                member_type = COALESCE($10, member_type),
                sort_order = COALESCE($11, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.company)
            .bind(&input.bio)
            .bind(&input.photo_path)
            .bind(&input.instagram_url)
            .bind(&input.linkedin_url)
            .bind(&input.website_url)
            .bind(&input.member_type)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a team member, returning the removed row. `None` if absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("DELETE FROM team_members WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
