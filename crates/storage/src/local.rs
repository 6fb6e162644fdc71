//! Filesystem-backed object storage for local development.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::{check_path, ObjectStorage, StorageError};

/// Stores objects at `{root}/{bucket}/{path}`.
pub struct LocalStorage {
    root: PathBuf,
    public_base: String,
}

impl LocalStorage {
    /// `public_base` is the URL prefix the directory is served under.
    pub fn new(root: impl Into<PathBuf>, public_base: &str) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }

    fn object_path(&self, bucket: &str, path: &str) -> Result<PathBuf, StorageError> {
        check_path(bucket)?;
        check_path(path)?;
        Ok(self.root.join(bucket).join(path))
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        data: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        let target = self.object_path(bucket, path)?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, data).await?;
        Ok(())
    }

    /// Deletes every valid path in the batch. A bad path or a failed delete
    /// is logged and skipped; the first such error is returned at the end.
    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), StorageError> {
        let mut first_error = None;
        for path in paths {
            let target = match self.object_path(bucket, path) {
                Ok(target) => target,
                Err(e) => {
                    tracing::warn!(bucket, path = %path, "Skipping invalid object path");
                    first_error.get_or_insert(e);
                    continue;
                }
            };
            match tokio::fs::remove_file(&target).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(bucket, path = %path, "Object already absent");
                }
                Err(e) => {
                    tracing::warn!(
                        bucket,
                        path = %path,
                        error = %e,
                        "Failed to delete object"
                    );
                    first_error.get_or_insert(e.into());
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/{bucket}/{path}", self.public_base)
    }
}
