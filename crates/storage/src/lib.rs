//! Object storage for uploaded images.
//!
//! Objects are addressed by `(bucket, path)`. Three backends implement
//! [`ObjectStorage`]:
//!
//! - [`hosted::HostedStorage`] -- the hosted storage REST API.
//! - [`local::LocalStorage`] -- a directory on the local filesystem.
//! - [`memory::MemoryStorage`] -- an in-process map, for tests and demos.

pub mod hosted;
pub mod local;
pub mod memory;

use async_trait::async_trait;

pub use hosted::HostedStorage;
pub use local::LocalStorage;
pub use memory::MemoryStorage;

/// Errors returned by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The path is not a valid object key.
    #[error("Invalid object path: {0}")]
    InvalidPath(String),

    /// The remote service answered with a non-success status.
    #[error("Storage service returned {status}: {message}")]
    Service { status: u16, message: String },

    /// The request never produced a response.
    #[error("Storage request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Local filesystem failure.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure injected by [`MemoryStorage`].
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A bucket/path object store.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `data` at `bucket/path`, replacing any existing object.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    /// Delete the given paths from `bucket`. Missing objects are not an error.
    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), StorageError>;

    /// Public URL under which `bucket/path` is served.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}

/// Map a path validation failure to [`StorageError::InvalidPath`].
pub(crate) fn check_path(path: &str) -> Result<(), StorageError> {
    reel_core::storage::validate_object_path(path)
        .map_err(|_| StorageError::InvalidPath(path.to_string()))
}
