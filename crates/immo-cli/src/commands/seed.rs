//! Seed command implementation.

use anyhow::Result;
use clap::Args;
use immo_core::demo_dataset;
use tracing::info;

use super::Context;
use crate::error::CliError;
use crate::output::print_success;
use crate::store::open_store;

/// Arguments for the seed command.
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Overwrite an existing dataset
    #[arg(long)]
    pub force: bool,
}

/// Executes the seed command.
pub fn execute(args: SeedArgs, ctx: &Context) -> Result<()> {
    let key = &ctx.config.store.key;
    let store = open_store(&ctx.config)?;

    if !args.force && store.contains(key)? {
        return Err(CliError::AlreadySeeded { key: key.clone() }.into());
    }

    let dataset = demo_dataset();
    store.save_dataset(key, &dataset)?;
    info!(key = %key, backend = store.backend_name(), "demo dataset stored");

    if !ctx.quiet {
        print_success(&format!(
            "Stored {} demo properties under '{}' ({})",
            dataset.len(),
            key,
            store.backend_name()
        ));
    }
    Ok(())
}
