//! Immo CLI - Command-line dashboard for a real-estate portfolio.
//!
//! # Usage
//!
//! ```bash
//! # Store the demo portfolio
//! immo seed
//!
//! # Full dashboard, filtered panels for Lyon
//! immo dashboard --search lyon
//!
//! # KPIs as JSON
//! immo kpis -f json
//!
//! # Merge properties from a spreadsheet export
//! immo import properties.csv
//!
//! # Check stored records
//! immo validate
//! ```

use anyhow::Result;
use clap::Parser;
use immo_core::Validate;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod store;

use cli::{Cli, Commands};
use commands::Context;
use config::CliConfig;

/// Installs the stderr subscriber. `RUST_LOG` wins over the flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = CliConfig::load(cli.config.as_deref())?.with_overrides(&cli);
    for issue in config.analytics.validate() {
        warn!(%issue, "analytics configuration");
    }
    debug!(
        backend = ?config.store.backend,
        path = %config.store_path().display(),
        "store selected"
    );

    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
        strict: cli.strict,
        config,
    };

    // Execute command
    match cli.command {
        Commands::Dashboard(args) => commands::dashboard::execute(args, &ctx)?,
        Commands::Properties(args) => commands::properties::execute(args, &ctx)?,
        Commands::Kpis => commands::kpis::execute(&ctx)?,
        Commands::Seed(args) => commands::seed::execute(args, &ctx)?,
        Commands::Import(args) => commands::import::execute(args, &ctx)?,
        Commands::Export(args) => commands::export::execute(args, &ctx)?,
        Commands::Validate => commands::validate::execute(&ctx)?,
    }

    Ok(())
}
