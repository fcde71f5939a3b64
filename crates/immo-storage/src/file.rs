//! JSON file blob store.
//!
//! One file per key, `<dir>/<key>.json`. Writes go to a sibling temporary
//! file which is then renamed over the target, so a crash never leaves a
//! half-written blob behind. The temporary file is removed on every failure.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapter::{validate_key, BlobStore};
use crate::error::{StorageError, StorageResult};

const EXTENSION: &str = "json";
const BACKEND: &str = "json";

/// Directory of JSON files, one per key.
///
/// The directory is created on the first write. Reading from a directory
/// that does not exist yet behaves like an empty store.
///
/// # Example
///
/// ```rust,no_run
/// use immo_storage::{BlobStore, JsonFileStore};
///
/// let store = JsonFileStore::new("./immo-data");
/// store.put("immo.pro.data", br#"{"properties":[]}"#)?;
/// # Ok::<(), immo_storage::StorageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`. Nothing is touched on disk.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the blob for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{EXTENSION}"))
    }

    fn ensure_dir(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.dir).map_err(|err| unavailable(&self.dir, &err))
    }

    /// Fails with `Unavailable` when the root exists but is not a directory.
    fn check_dir(&self) -> StorageResult<()> {
        if self.dir.exists() && !self.dir.is_dir() {
            return Err(StorageError::unavailable(
                BACKEND,
                format!("{}: not a directory", self.dir.display()),
            ));
        }
        Ok(())
    }
}

fn unavailable(path: &Path, err: &io::Error) -> StorageError {
    StorageError::unavailable(BACKEND, format!("{}: {err}", path.display()))
}

fn classify(path: &Path, err: io::Error) -> StorageError {
    match err.kind() {
        ErrorKind::PermissionDenied => unavailable(path, &err),
        _ => StorageError::Io(err),
    }
}

impl BlobStore for JsonFileStore {
    fn backend_name(&self) -> &'static str {
        BACKEND
    }

    fn is_healthy(&self) -> bool {
        !self.dir.exists() || self.dir.is_dir()
    }

    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        validate_key(key)?;
        self.check_dir()?;
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(classify(&path, err)),
        }
    }

    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        validate_key(key)?;
        self.ensure_dir()?;

        let path = self.path_for(key);
        let mut tmp = tempfile::Builder::new()
            .prefix(&format!(".{key}."))
            .suffix(".tmp")
            .tempfile_in(&self.dir)
            .map_err(|err| classify(&self.dir, err))?;
        tmp.write_all(value)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|err| classify(&path, err.error))?;

        debug!(path = %path.display(), bytes = value.len(), "blob written");
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<bool> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(classify(&path, err)),
        }
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        self.check_dir()?;
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(classify(&self.dir, err)),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_key(stem).is_ok() {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
