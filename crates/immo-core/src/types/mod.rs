//! Domain types for real-estate portfolio analytics.
//!
//! - [`PropertyRecord`]: one owned asset, as persisted by the dashboard
//! - [`PropertyStatus`]: occupancy status
//! - [`TransactionRecord`]: ledger entry (reserved, not aggregated yet)
//! - [`Dataset`]: the mutable holder of both lists

mod dataset;
mod property;
mod status;
mod transaction;

pub use dataset::Dataset;
pub use property::{PropertyBuilder, PropertyRecord};
pub use status::PropertyStatus;
pub use transaction::{TransactionKind, TransactionRecord};
