//! Import command implementation.
//!
//! Reads property rows from CSV, drops rows with validation errors and merges
//! the rest into the stored dataset by id.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use immo_core::{partition_valid, Dataset, PropertyRecord};
use immo_storage::read_properties_from_path;
use tracing::{debug, info};

use super::Context;
use crate::output::{print_success, print_warning};
use crate::store::load_for_write;

/// Arguments for the import command.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV file with one property per row
    pub file: PathBuf,

    /// Replace all stored properties instead of merging
    #[arg(long)]
    pub replace: bool,
}

/// Outcome of merging imported records into a dataset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    /// Records appended.
    pub added: usize,
    /// Records that replaced one with the same id.
    pub updated: usize,
}

/// Merges records into the dataset by id. With `replace`, existing
/// properties are dropped first; transactions are kept either way.
pub fn merge(dataset: &mut Dataset, records: Vec<PropertyRecord>, replace: bool) -> MergeSummary {
    if replace {
        dataset.replace_properties(Vec::new());
    }
    let mut summary = MergeSummary::default();
    for record in records {
        if dataset.upsert_property(record) {
            summary.updated += 1;
        } else {
            summary.added += 1;
        }
    }
    summary
}

/// Executes the import command.
pub fn execute(args: ImportArgs, ctx: &Context) -> Result<()> {
    let mut records = read_properties_from_path(&args.file)?;
    let generated = records.iter_mut().map(PropertyRecord::ensure_id).filter(|g| *g).count();
    debug!(rows = records.len(), generated, "rows read");

    let (kept, rejected) = partition_valid(records);
    if !ctx.quiet {
        for issue in &rejected {
            print_warning(&format!("Skipped: {issue}"));
        }
    }

    let (store, mut dataset) = load_for_write(&ctx.config)?;
    let summary = merge(&mut dataset, kept, args.replace);
    store.save_dataset(&ctx.config.store.key, &dataset)?;
    info!(
        added = summary.added,
        updated = summary.updated,
        rejected = rejected.len(),
        "import saved"
    );

    if !ctx.quiet {
        print_success(&format!(
            "Imported {} new and {} updated properties ({} stored)",
            summary.added,
            summary.updated,
            dataset.len()
        ));
    }
    Ok(())
}
