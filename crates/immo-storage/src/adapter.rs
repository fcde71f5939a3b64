//! Blob store trait definition.
//!
//! This module defines the [`BlobStore`] trait that every backend implements,
//! plus the dataset load/save helpers built on top of it.

use immo_core::Dataset;
use tracing::debug;

use crate::error::{StorageError, StorageResult};

/// Key-value store of opaque byte blobs.
///
/// The dashboard persists its whole dataset as one JSON blob under a single
/// key. Backends are synchronous and thread-safe; none of them swallow
/// errors, so fallback decisions stay with the caller.
///
/// # Example
///
/// ```rust
/// use immo_core::{demo_dataset, DEFAULT_DATASET_KEY};
/// use immo_storage::{BlobStore, InMemoryStore};
///
/// let store = InMemoryStore::new();
/// store.save_dataset(DEFAULT_DATASET_KEY, &demo_dataset()).unwrap();
/// let loaded = store.load_dataset(DEFAULT_DATASET_KEY).unwrap().unwrap();
/// assert_eq!(loaded.len(), 4);
/// ```
pub trait BlobStore: Send + Sync {
    /// Returns the backend name for logging.
    fn backend_name(&self) -> &'static str;

    /// Checks if the storage is healthy and accessible.
    fn is_healthy(&self) -> bool;

    /// Reads the blob stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any previous blob.
    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()>;

    /// Removes `key`. Returns whether it existed.
    fn delete(&self, key: &str) -> StorageResult<bool>;

    /// Lists stored keys in ascending order.
    fn keys(&self) -> StorageResult<Vec<String>>;

    /// Returns true if `key` holds a blob.
    fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Loads and decodes the dataset stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored there.
    fn load_dataset(&self, key: &str) -> StorageResult<Option<Dataset>> {
        let Some(bytes) = self.get(key)? else {
            debug!(backend = self.backend_name(), key, "no dataset stored");
            return Ok(None);
        };

        let dataset: Dataset = serde_json::from_slice(&bytes)?;
        debug!(
            backend = self.backend_name(),
            key,
            properties = dataset.len(),
            bytes = bytes.len(),
            "dataset loaded"
        );
        Ok(Some(dataset))
    }

    /// Encodes `dataset` as JSON and stores it under `key`.
    fn save_dataset(&self, key: &str, dataset: &Dataset) -> StorageResult<()> {
        let bytes = serde_json::to_vec(dataset)?;
        self.put(key, &bytes)?;
        debug!(
            backend = self.backend_name(),
            key,
            properties = dataset.len(),
            bytes = bytes.len(),
            "dataset saved"
        );
        Ok(())
    }
}

/// Checks that `key` is non-empty and made of `[A-Za-z0-9._-]`.
///
/// Keys double as file names for the JSON backend, so path separators and
/// `..` are rejected.
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::invalid_key(key, "must not be empty"));
    }
    if key == "." || key == ".." {
        return Err(StorageError::invalid_key(key, "must not be a relative path"));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(StorageError::invalid_key(key, "only [A-Za-z0-9._-] allowed"));
    }
    Ok(())
}
