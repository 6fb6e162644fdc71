//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` input DTO for inserts and full-form saves

pub mod category;
pub mod feature;
pub mod message;
pub mod profile;
pub mod project;
pub mod session;
pub mod setting;
pub mod team_member;
pub mod user;

use reel_core::error::CoreError;
use reel_core::storage::validate_object_path;
use validator::ValidationError;

/// An image field holding a bucket-relative object path.
///
/// Blank means "no image" and is accepted; anything else must be a clean
/// relative path.
pub(crate) fn storage_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Ok(());
    }
    validate_object_path(path).map_err(|e| {
        let mut err = ValidationError::new("storage_path");
        err.message = Some(match e {
            CoreError::Validation(msg) => msg.into(),
            other => other.to_string().into(),
        });
        err
    })
}

/// [`storage_path`] applied to every entry of a list field.
pub(crate) fn storage_paths(paths: &[String]) -> Result<(), ValidationError> {
    paths.iter().try_for_each(|p| storage_path(p))
}
