//! Immo Storage Layer
//!
//! Persistence for the portfolio dataset. The dashboard stores its whole
//! dataset as one JSON blob under a single key; this crate provides the
//! key-value port for that blob and three interchangeable backends.
//!
//! # Example
//!
//! ```rust
//! use immo_core::{demo_dataset, DEFAULT_DATASET_KEY};
//! use immo_storage::{BlobStore, JsonFileStore};
//!
//! let dir = tempfile::tempdir()?;
//! let store = JsonFileStore::new(dir.path());
//!
//! assert!(store.load_dataset(DEFAULT_DATASET_KEY)?.is_none());
//! store.save_dataset(DEFAULT_DATASET_KEY, &demo_dataset())?;
//! assert_eq!(store.load_dataset(DEFAULT_DATASET_KEY)?.map(|d| d.len()), Some(4));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Storage Backends
//!
//! ## JsonFileStore
//!
//! One `<key>.json` file per key in a directory, written atomically. The file
//! content is exactly the blob the browser dashboard keeps in local storage.
//!
//! ## RedbStore
//!
//! Uses [redb](https://crates.io/crates/redb), a pure-Rust embedded database
//! with ACID transactions. Suitable for single-process applications.
//!
//! ## InMemoryStore
//!
//! A simple in-memory implementation for testing and development.
//! Data is not persisted across restarts.
//!
//! # CSV
//!
//! [`read_properties`] and [`write_properties`] convert property records to
//! and from a flat CSV table for spreadsheet round-trips.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod adapter;
mod csv_io;
mod error;
mod file;
mod memory;
mod redb;

pub use adapter::{validate_key, BlobStore};
pub use csv_io::{read_properties, read_properties_from_path, write_properties};
pub use error::{StorageError, StorageResult};
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use self::redb::RedbStore;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::adapter::BlobStore;
    pub use crate::error::{StorageError, StorageResult};
    pub use crate::file::JsonFileStore;
    pub use crate::memory::InMemoryStore;
    pub use crate::redb::RedbStore;
}
