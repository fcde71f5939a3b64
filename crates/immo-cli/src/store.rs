//! Opening the configured store and loading the dataset.
//!
//! Read-only commands fall back to the demo portfolio when nothing is stored
//! or, outside `--strict`, when storage fails. Write commands always surface
//! storage errors.

use immo_core::{demo_dataset, Dataset};
use immo_storage::{BlobStore, InMemoryStore, JsonFileStore, RedbStore, StorageResult};
use tracing::{debug, warn};

use crate::config::{Backend, CliConfig};
use crate::error::CliResult;

/// Where a loaded dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    /// Read from the store.
    Stored,
    /// Nothing stored under the key.
    DemoEmpty,
    /// Storage failed and the demo portfolio was used instead.
    DemoFallback,
}

/// Opens the backend selected by `config`.
pub fn open_store(config: &CliConfig) -> StorageResult<Box<dyn BlobStore>> {
    let path = config.store_path();
    let store: Box<dyn BlobStore> = match config.store.backend {
        Backend::Json => Box::new(JsonFileStore::new(path)),
        Backend::Redb => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|err| {
                        immo_storage::StorageError::unavailable("redb", err.to_string())
                    })?;
                }
            }
            Box::new(RedbStore::open(path)?)
        }
        Backend::Memory => Box::new(InMemoryStore::new()),
    };
    debug!(backend = store.backend_name(), "store opened");
    Ok(store)
}

/// Loads the dataset for a read-only command.
pub fn load_for_read(config: &CliConfig, strict: bool) -> CliResult<(Dataset, DatasetSource)> {
    let key = &config.store.key;
    let loaded = open_store(config).and_then(|store| store.load_dataset(key));

    match loaded {
        Ok(Some(dataset)) => Ok((dataset, DatasetSource::Stored)),
        Ok(None) => {
            debug!(key = %key, "no stored dataset, using demo portfolio");
            Ok((demo_dataset(), DatasetSource::DemoEmpty))
        }
        Err(err) if strict => Err(err.into()),
        Err(err) => {
            warn!(key = %key, error = %err, "storage unusable, using demo portfolio");
            Ok((demo_dataset(), DatasetSource::DemoFallback))
        }
    }
}

/// Loads the dataset for a command that will write it back.
///
/// Returns the store so the caller saves to the same backend. An empty store
/// yields an empty dataset rather than the demo portfolio.
pub fn load_for_write(config: &CliConfig) -> CliResult<(Box<dyn BlobStore>, Dataset)> {
    let store = open_store(config)?;
    let dataset = store.load_dataset(&config.store.key)?.unwrap_or_default();
    Ok((store, dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn json_config(path: PathBuf) -> CliConfig {
        let mut config = CliConfig::default();
        config.store.backend = Backend::Json;
        config.store.path = Some(path);
        config
    }

    #[test]
    fn test_empty_store_reads_demo() {
        let tmp = tempfile::tempdir().unwrap();
        let (dataset, source) = load_for_read(&json_config(tmp.path().into()), true).unwrap();
        assert_eq!(source, DatasetSource::DemoEmpty);
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_corrupt_store_strict_and_lenient() {
        let tmp = tempfile::tempdir().unwrap();
        let config = json_config(tmp.path().into());
        std::fs::write(tmp.path().join("immo.pro.data.json"), "{broken").unwrap();

        assert!(load_for_read(&config, true).is_err());
        let (dataset, source) = load_for_read(&config, false).unwrap();
        assert_eq!(source, DatasetSource::DemoFallback);
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_write_load_starts_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let (store, dataset) = load_for_write(&json_config(tmp.path().into())).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(store.backend_name(), "json");
    }
}
