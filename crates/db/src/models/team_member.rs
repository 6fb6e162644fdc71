//! Team member entity model and DTOs.

use reel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::storage_path;

/// A row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub company: Option<String>,
    pub bio: String,
    /// Object path in the team bucket.
    pub photo_path: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub website_url: Option<String>,
    /// `"team"` or `"partner"`.
    pub member_type: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TeamMember {
    /// Storage paths referenced by this member (at most the photo).
    pub fn image_paths(&self) -> Vec<&str> {
        self.photo_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .into_iter()
            .collect()
    }
}

/// DTO for saving a team member from the admin form (create or full update).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveTeamMember {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "Role must be 1-120 characters"))]
    pub role: String,
    pub company: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[validate(custom(function = "storage_path"))]
    pub photo_path: Option<String>,
    #[validate(url(message = "Instagram link must be a valid URL"))]
    pub instagram_url: Option<String>,
    #[validate(url(message = "LinkedIn link must be a valid URL"))]
    pub linkedin_url: Option<String>,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website_url: Option<String>,
    /// Defaults to `"team"` if omitted.
    pub member_type: Option<String>,
    pub sort_order: Option<i32>,
}

/// Query parameters for the public team listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamListParams {
    #[serde(rename = "type")]
    pub member_type: Option<String>,
}
