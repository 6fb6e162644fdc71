//! In-process object storage.
//!
//! Records every removal request so callers can assert on cleanup, and can
//! be switched into a failing mode to exercise best-effort paths.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{check_path, ObjectStorage, StorageError};

/// Objects keyed by `(bucket, path)`.
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<BTreeMap<(String, String), Vec<u8>>>,
    removed: Mutex<Vec<(String, String)>>,
    fail_removals: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `remove` call fail (or succeed again).
    pub fn set_fail_removals(&self, fail: bool) {
        self.fail_removals.store(fail, Ordering::SeqCst);
    }

    /// Whether an object currently exists.
    pub fn contains(&self, bucket: &str, path: &str) -> bool {
        self.objects
            .lock()
            .expect("storage lock poisoned")
            .contains_key(&(bucket.to_string(), path.to_string()))
    }

    /// Every `(bucket, path)` a successful `remove` call was asked to delete,
    /// in call order.
    pub fn removed(&self) -> Vec<(String, String)> {
        self.removed.lock().expect("storage lock poisoned").clone()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().expect("storage lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        data: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        check_path(path)?;
        self.objects
            .lock()
            .expect("storage lock poisoned")
            .insert((bucket.to_string(), path.to_string()), data);
        Ok(())
    }

    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), StorageError> {
        if self.fail_removals.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("removals disabled".into()));
        }
        let mut objects = self.objects.lock().expect("storage lock poisoned");
        let mut removed = self.removed.lock().expect("storage lock poisoned");
        for path in paths {
            let key = (bucket.to_string(), path.clone());
            objects.remove(&key);
            removed.push(key);
        }
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("memory://{bucket}/{path}")
    }
}
