//! CLI command implementations.

pub mod dashboard;
pub mod export;
pub mod import;
pub mod kpis;
pub mod properties;
pub mod seed;
pub mod validate;

// Re-export submodules for convenience
pub use dashboard::DashboardArgs;
pub use export::ExportArgs;
pub use import::ImportArgs;
pub use properties::PropertiesArgs;
pub use seed::SeedArgs;

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::output::print_info;
use crate::store::DatasetSource;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress informational lines.
    pub quiet: bool,
    /// Propagate storage failures instead of falling back to demo data.
    pub strict: bool,
    /// Resolved configuration.
    pub config: CliConfig,
}

impl Context {
    /// Prints an informational line in table mode, unless quiet.
    pub fn info(&self, message: &str) {
        if !self.quiet && self.format == OutputFormat::Table {
            print_info(message);
        }
    }

    /// Tells the user when the demo portfolio stands in for stored data.
    pub fn report_source(&self, source: DatasetSource) {
        match source {
            DatasetSource::Stored => {}
            DatasetSource::DemoEmpty => self.info("No stored dataset, showing the demo portfolio."),
            DatasetSource::DemoFallback => {
                self.info("Storage unavailable, showing the demo portfolio.")
            }
        }
    }
}
