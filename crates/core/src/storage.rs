//! Object-storage buckets, upload naming and orphan bookkeeping.
//!
//! Records reference uploaded images by their path inside a bucket. When a
//! record is edited or deleted, the paths it stops referencing are computed
//! here and handed to the storage backend for a single best-effort delete.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

/// Bucket holding project cover, gallery and before/after images.
pub const BUCKET_PORTFOLIO: &str = "portfolio";

/// Bucket holding team member photos.
pub const BUCKET_TEAM: &str = "team";

const VALID_BUCKETS: &[&str] = &[BUCKET_PORTFOLIO, BUCKET_TEAM];

/// Validate that `bucket` is one of the known buckets.
pub fn validate_bucket(bucket: &str) -> Result<(), CoreError> {
    if VALID_BUCKETS.contains(&bucket) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown bucket '{bucket}'. Must be one of: {}",
            VALID_BUCKETS.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Upload naming
// ---------------------------------------------------------------------------

/// Image extensions accepted for upload.
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif"];

/// Default upload size limit (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Extract and validate the lowercase extension of an uploaded file name.
pub fn image_extension(filename: &str) -> Result<String, CoreError> {
    let ext = match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => {
            return Err(CoreError::Validation(format!(
                "File '{filename}' has no extension"
            )))
        }
    };
    if !ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "Unsupported image format '.{ext}'. Supported: {}",
            ALLOWED_IMAGE_EXTENSIONS.join(", ")
        )));
    }
    Ok(ext)
}

/// Generate a random object path for a new upload: `<uuid-v4>.<ext>`.
pub fn generate_object_path(ext: &str) -> String {
    format!("{}.{ext}", uuid::Uuid::new_v4())
}

/// MIME type for an accepted image extension.
pub fn content_type_for(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Reject paths that could escape their bucket or address nothing.
pub fn validate_object_path(path: &str) -> Result<(), CoreError> {
    if path.trim().is_empty() {
        return Err(CoreError::Validation("Storage path must not be empty".into()));
    }
    if path.starts_with('/') || path.split('/').any(|seg| seg == ".." || seg.is_empty()) {
        return Err(CoreError::Validation(format!(
            "Invalid storage path '{path}'"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Orphan bookkeeping
// ---------------------------------------------------------------------------

/// Paths present in `previous` but absent from `current`.
///
/// Order of first appearance in `previous` is kept, duplicates and empty
/// strings are dropped. There is no reference counting: a path another
/// record still names is reported all the same.
pub fn removed_paths<'a, P, C>(previous: P, current: C) -> Vec<String>
where
    P: IntoIterator<Item = &'a str>,
    C: IntoIterator<Item = &'a str>,
{
    let current: Vec<&str> = current.into_iter().collect();
    let mut removed: Vec<String> = Vec::new();
    for path in previous {
        if path.is_empty() || current.contains(&path) {
            continue;
        }
        if !removed.iter().any(|p| p == path) {
            removed.push(path.to_string());
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_bucket_known_and_unknown() {
        assert!(validate_bucket("portfolio").is_ok());
        assert!(validate_bucket("team").is_ok());
        assert!(validate_bucket("avatars").is_err());
    }

    #[test]
    fn image_extension_lowercases() {
        assert_eq!(image_extension("Shot.JPG").unwrap(), "jpg");
    }

    #[test]
    fn image_extension_rejects_unsupported_and_missing() {
        assert!(image_extension("clip.mp4").is_err());
        assert!(image_extension("noext").is_err());
        assert!(image_extension(".png").is_err());
    }

    #[test]
    fn generated_paths_are_unique_and_keep_extension() {
        let a = generate_object_path("png");
        let b = generate_object_path("png");
        assert_ne!(a, b);
        assert!(a.ends_with(".png"));
        assert_eq!(a.len(), 36 + 4);
    }

    #[test]
    fn object_path_rejects_traversal() {
        assert!(validate_object_path("abc.png").is_ok());
        assert!(validate_object_path("covers/abc.png").is_ok());
        assert!(validate_object_path("../abc.png").is_err());
        assert!(validate_object_path("/abc.png").is_err());
        assert!(validate_object_path("a//b.png").is_err());
        assert!(validate_object_path(" ").is_err());
    }

    #[test]
    fn removed_paths_is_a_set_difference() {
        let removed = removed_paths(["a.png", "b.png", "c.png"], ["b.png", "d.png"]);
        assert_eq!(removed, vec!["a.png", "c.png"]);
    }

    #[test]
    fn removed_paths_dedupes_and_skips_empty() {
        let removed = removed_paths(["a.png", "", "a.png"], []);
        assert_eq!(removed, vec!["a.png"]);
    }

    #[test]
    fn removed_paths_empty_when_nothing_changed() {
        assert!(removed_paths(["a.png"], ["a.png"]).is_empty());
    }
}
