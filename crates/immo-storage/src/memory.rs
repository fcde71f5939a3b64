//! In-memory blob store.
//!
//! Useful for testing and for running the CLI without touching disk. Data is
//! not persisted across restarts.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::adapter::{validate_key, BlobStore};
use crate::error::StorageResult;

/// In-memory blob store.
///
/// # Example
///
/// ```rust
/// use immo_storage::{BlobStore, InMemoryStore};
///
/// let store = InMemoryStore::new();
/// assert!(store.is_healthy());
/// ```
#[derive(Default)]
pub struct InMemoryStore {
    blobs: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all data from the store.
    pub fn clear(&self) {
        self.blobs.write().clear();
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs.read().len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.blobs.read().is_empty()
    }
}

impl BlobStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn is_healthy(&self) -> bool {
        true
    }

    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self.blobs.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        validate_key(key)?;
        self.blobs.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<bool> {
        validate_key(key)?;
        Ok(self.blobs.write().remove(key).is_some())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.blobs.read().keys().cloned().collect())
    }
}
