//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{DashboardArgs, ExportArgs, ImportArgs, PropertiesArgs, SeedArgs};
use crate::config::Backend;

/// Immo - Real-estate portfolio dashboard in the terminal
#[derive(Parser, Debug)]
#[command(name = "immo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: <config dir>/immo/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage directory or redb file
    #[arg(long, env = "IMMO_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Storage backend
    #[arg(long, value_enum, global = true)]
    pub backend: Option<Backend>,

    /// Key the dataset is stored under
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Fail instead of falling back to demo data when storage is unusable
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the full dashboard (KPIs, revenue, breakdowns, performance)
    Dashboard(DashboardArgs),

    /// List properties as cards
    Properties(PropertiesArgs),

    /// Show portfolio KPIs
    Kpis,

    /// Store the demo portfolio
    Seed(SeedArgs),

    /// Import properties from a CSV file
    Import(ImportArgs),

    /// Export properties as CSV or JSON
    Export(ExportArgs),

    /// Check stored records for malformed values
    Validate,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
