//! Feature card entity model and DTOs.

use reel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `features` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feature {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Icon identifier resolved by the frontend.
    pub icon: String,
    /// Page context the card is shown on.
    pub page: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a feature card (create or full update).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveFeature {
    #[validate(length(min = 1, max = 120, message = "Title must be 1-120 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 1000, message = "Description must be 1-1000 characters"))]
    pub description: String,
    #[validate(length(min = 1, max = 60, message = "Icon must be 1-60 characters"))]
    pub icon: String,
    pub page: String,
    pub sort_order: Option<i32>,
}

/// Query parameters for reading features.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureListParams {
    pub page: Option<String>,
}
