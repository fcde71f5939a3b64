//! Export command implementation.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use immo_storage::write_properties;

use super::Context;
use crate::cli::OutputFormat;
use crate::output::{print_success, print_warning};
use crate::store::{load_for_read, DatasetSource};

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file (default: stdout). `--format json` writes the full dataset, anything else CSV.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Executes the export command.
pub fn execute(args: ExportArgs, ctx: &Context) -> Result<()> {
    let (dataset, source) = load_for_read(&ctx.config, ctx.strict)?;
    if source != DatasetSource::Stored && !ctx.quiet {
        print_warning("No stored dataset, exporting the demo portfolio.");
    }

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    match ctx.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &dataset)?;
            writeln!(writer)?;
        }
        OutputFormat::Table | OutputFormat::Csv => {
            write_properties(&mut writer, dataset.properties())?;
        }
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        if !ctx.quiet {
            print_success(&format!("Exported {} properties to {}", dataset.len(), path.display()));
        }
    }
    Ok(())
}
