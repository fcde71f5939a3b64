//! RedbStore implementation.
//!
//! Implements the BlobStore trait using redb as the underlying database.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableTable, TableDefinition};
use tracing::debug;

use crate::adapter::{validate_key, BlobStore};
use crate::error::StorageResult;

const BLOBS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("blobs");

/// Redb-based blob store.
///
/// All blobs live in a single `blobs` table. Each `put` and `delete` is one
/// write transaction.
///
/// # Example
///
/// ```rust,no_run
/// use immo_storage::{BlobStore, RedbStore};
///
/// let store = RedbStore::open("./immo.redb")?;
/// assert!(store.is_healthy());
/// # Ok::<(), immo_storage::StorageError>(())
/// ```
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Opens or creates a database at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`](crate::StorageError::Unavailable)
    /// if the database file cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let path = path.as_ref();
        let db = Database::create(path)?;
        let store = Self { db: Arc::new(db) };
        store.initialize_tables()?;
        debug!(path = %path.display(), "redb store opened");
        Ok(store)
    }

    fn initialize_tables(&self) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(BLOBS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl BlobStore for RedbStore {
    fn backend_name(&self) -> &'static str {
        "redb"
    }

    fn is_healthy(&self) -> bool {
        self.db.begin_read().is_ok()
    }

    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        validate_key(key)?;
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(BLOBS_TABLE)?;
        let value = table.get(key)?.map(|data| data.value().to_vec());
        Ok(value)
    }

    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        validate_key(key)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(BLOBS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<bool> {
        validate_key(key)?;
        let write_txn = self.db.begin_write()?;
        let deleted = {
            let mut table = write_txn.open_table(BLOBS_TABLE)?;
            let result = table.remove(key)?;
            result.is_some()
        };
        write_txn.commit()?;
        Ok(deleted)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(BLOBS_TABLE)?;

        let mut keys = Vec::new();
        for entry in table.iter()? {
            let (key, _) = entry?;
            keys.push(key.value().to_string());
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_and_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("immo.redb");

        {
            let store = RedbStore::open(&path).unwrap();
            assert!(store.is_healthy());
            store.put("immo.pro.data", b"{\"properties\":[]}").unwrap();
            store.put("backup", b"x").unwrap();
        }

        let store = RedbStore::open(&path).unwrap();
        assert_eq!(
            store.get("immo.pro.data").unwrap().as_deref(),
            Some(&b"{\"properties\":[]}"[..])
        );
        assert_eq!(store.keys().unwrap(), vec!["backup", "immo.pro.data"]);
    }

    #[test]
    fn test_delete() {
        let tmp = tempfile::tempdir().unwrap();
        let store = RedbStore::open(tmp.path().join("d.redb")).unwrap();
        store.put("k", b"v").unwrap();
        assert!(store.delete("k").unwrap());
        assert!(!store.delete("k").unwrap());
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_missing_parent_is_unavailable() {
        let tmp = tempfile::tempdir().unwrap();
        let err = match RedbStore::open(tmp.path().join("missing").join("x.redb")) {
            Err(err) => err,
            Ok(_) => panic!("opened a database in a missing directory"),
        };
        assert!(err.is_unavailable(), "{err}");
    }
}
