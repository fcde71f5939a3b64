//! # Immo Core
//!
//! Core types and abstractions for the Immo real-estate portfolio analytics library.
//!
//! This crate provides the foundational building blocks used throughout Immo:
//!
//! - **Types**: [`PropertyRecord`], [`TransactionRecord`], [`PropertyStatus`] and the
//!   mutable [`Dataset`] that holds them
//! - **Demo data**: the seed portfolio used when no persisted dataset exists
//! - **Validation**: an input-sanitizing boundary kept separate from the aggregation code
//!
//! ## Design Philosophy
//!
//! - **Explicit defaults**: every numeric field is optional on the wire and normalised
//!   to zero by an accessor, never by implicit coercion
//! - **Wire compatibility**: records serialise to the camelCase JSON blob the dashboard
//!   persists under [`DEFAULT_DATASET_KEY`]
//! - **Validation is opt-in**: malformed records are accepted as-is; callers that want
//!   well-formed input run [`Validate`] first
//!
//! ## Example
//!
//! ```rust
//! use immo_core::prelude::*;
//!
//! let mut dataset = Dataset::new();
//! dataset.add_property(
//!     PropertyRecord::builder("Studio - Lille")
//!         .id("p4")
//!         .city("Lille")
//!         .rent(650.0)
//!         .purchase_price(145_000.0)
//!         .build(),
//! )
//! .unwrap();
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.revision(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod demo;
pub mod error;
pub mod types;
pub mod validation;

/// Storage key under which the dashboard persists its dataset.
pub const DEFAULT_DATASET_KEY: &str = "immo.pro.data";

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::demo::demo_dataset;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        Dataset, PropertyBuilder, PropertyRecord, PropertyStatus, TransactionKind,
        TransactionRecord,
    };
    pub use crate::validation::{partition_valid, Severity, Validate, ValidationIssue};
    pub use crate::DEFAULT_DATASET_KEY;
}

// Re-export commonly used types at crate root
pub use demo::demo_dataset;
pub use error::{CoreError, CoreResult};
pub use types::{
    Dataset, PropertyBuilder, PropertyRecord, PropertyStatus, TransactionKind, TransactionRecord,
};
pub use validation::{parse_date, partition_valid, Severity, Validate, ValidationIssue};
