//! Project entity model and DTOs.

use chrono::NaiveDate;
use reel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use super::{storage_path, storage_paths};

/// A before/after comparison shown on the project detail page.
///
/// `before` and `after` are object paths in the portfolio bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DetailPair {
    #[validate(length(max = 120, message = "Label must be at most 120 characters"))]
    #[serde(default)]
    pub label: Option<String>,
    #[validate(
        length(min = 1, message = "Before image is required"),
        custom(function = "storage_path")
    )]
    pub before: String,
    #[validate(
        length(min = 1, message = "After image is required"),
        custom(function = "storage_path")
    )]
    pub after: String,
}

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub media_link: Option<String>,
    pub description: String,
    pub drone_description: Option<String>,
    pub post_description: Option<String>,
    pub details: Json<Vec<DetailPair>>,
    pub client_name: Option<String>,
    pub client_site: Option<String>,
    /// Comma-joined category names.
    pub category: String,
    pub project_date: Option<NaiveDate>,
    pub cover_image: Option<String>,
    pub gallery: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Every storage path this project references, in the portfolio bucket.
    pub fn image_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        if let Some(cover) = self.cover_image.as_deref() {
            paths.push(cover);
        }
        paths.extend(self.gallery.iter().map(String::as_str));
        for pair in self.details.0.iter() {
            paths.push(&pair.before);
            paths.push(&pair.after);
        }
        paths.retain(|p| !p.is_empty());
        paths
    }
}

/// DTO for saving a project from the admin form.
///
/// Used for both create and update: an update replaces every field, so a
/// cleared image field really clears the reference.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveProject {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(url(message = "Media link must be a valid URL"))]
    pub media_link: Option<String>,
    #[serde(default)]
    pub description: String,
    pub drone_description: Option<String>,
    pub post_description: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub details: Vec<DetailPair>,
    #[validate(length(max = 200, message = "Client name must be at most 200 characters"))]
    pub client_name: Option<String>,
    #[validate(url(message = "Client site must be a valid URL"))]
    pub client_site: Option<String>,
    #[serde(default)]
    pub category: String,
    pub project_date: Option<NaiveDate>,
    #[validate(custom(function = "storage_path"))]
    pub cover_image: Option<String>,
    #[validate(custom(function = "storage_paths"))]
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl SaveProject {
    /// Every storage path named by this form, empty strings excluded.
    pub fn image_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        if let Some(cover) = self.cover_image.as_deref() {
            paths.push(cover);
        }
        paths.extend(self.gallery.iter().map(String::as_str));
        for pair in &self.details {
            paths.push(&pair.before);
            paths.push(&pair.after);
        }
        paths.retain(|p| !p.is_empty());
        paths
    }
}

/// Query parameters for the public project listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListParams {
    /// Exact category name; matches whole labels of the tag string.
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
