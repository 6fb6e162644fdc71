//! Category entity model and DTOs.

use reel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or renaming a category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveCategory {
    #[validate(
        length(min = 1, max = 80, message = "Name must be 1-80 characters"),
        custom(function = "no_commas")
    )]
    pub name: String,
}

/// Category names are embedded in comma-joined tag strings.
fn no_commas(name: &str) -> Result<(), validator::ValidationError> {
    if name.contains(',') {
        let mut err = validator::ValidationError::new("no_commas");
        err.message = Some("Name must not contain commas".into());
        return Err(err);
    }
    Ok(())
}

/// Result of a rename: the updated row and how many projects were retagged.
#[derive(Debug, Clone, Serialize)]
pub struct RenameOutcome {
    pub category: Category,
    pub projects_updated: u64,
}
