//! Best-effort removal of storage objects a record stopped referencing.
//!
//! Runs after the database write has committed. Failures are logged and
//! dropped: the request that triggered the cleanup still succeeds and the
//! object is left orphaned.

use reel_core::types::DbId;
use reel_storage::ObjectStorage;

/// Delete `paths` from `bucket` in a single request, logging the outcome.
pub async fn remove_orphans(
    storage: &dyn ObjectStorage,
    bucket: &str,
    paths: Vec<String>,
    entity: &'static str,
    id: DbId,
) {
    if paths.is_empty() {
        return;
    }
    match storage.remove(bucket, &paths).await {
        Ok(()) => {
            tracing::info!(
                entity,
                id,
                bucket,
                count = paths.len(),
                "Removed orphaned storage objects"
            );
        }
        Err(e) => {
            tracing::warn!(
                entity,
                id,
                bucket,
                paths = ?paths,
                error = %e,
                "Failed to remove orphaned storage objects",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_storage::MemoryStorage;

    #[tokio::test]
    async fn removes_given_paths() {
        let storage = MemoryStorage::new();
        remove_orphans(&storage, "portfolio", vec!["a.png".into()], "Project", 1).await;
        assert_eq!(storage.removed(), vec![("portfolio".to_string(), "a.png".to_string())]);
    }

    #[tokio::test]
    async fn failure_is_swallowed() {
        let storage = MemoryStorage::new();
        storage.set_fail_removals(true);
        remove_orphans(&storage, "team", vec!["p.jpg".into()], "TeamMember", 2).await;
        assert!(storage.removed().is_empty());
    }

    #[tokio::test]
    async fn empty_list_skips_request() {
        let storage = MemoryStorage::new();
        storage.set_fail_removals(true);
        remove_orphans(&storage, "team", Vec::new(), "TeamMember", 3).await;
        assert!(storage.removed().is_empty());
    }
}
