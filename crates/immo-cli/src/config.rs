//! CLI configuration file.
//!
//! ```toml
//! [store]
//! backend = "redb"
//! path = "/home/me/.local/share/immo/immo.redb"
//! key = "immo.pro.data"
//!
//! [analytics]
//! geo_top_n = 3
//! ```
//!
//! Command-line flags and `IMMO_STORE` override the file; the file overrides
//! built-in defaults.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use immo_analytics::AnalyticsConfig;
use immo_core::DEFAULT_DATASET_KEY;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON file per key in a directory
    #[default]
    Json,
    /// Embedded redb database file
    Redb,
    /// Process memory, nothing persisted
    Memory,
}

/// `[store]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Backend to open.
    pub backend: Backend,
    /// Directory (json) or database file (redb).
    pub path: Option<PathBuf>,
    /// Dataset key.
    pub key: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            path: None,
            key: DEFAULT_DATASET_KEY.to_string(),
        }
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Where the dataset lives.
    pub store: StoreSettings,
    /// Aggregation settings.
    pub analytics: AnalyticsConfig,
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|err| CliError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        toml::from_str(&content).map_err(|err| CliError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Loads the explicit file, else the default file if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading configuration");
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading configuration");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(backend) = cli.backend {
            self.store.backend = backend;
        }
        if let Some(path) = &cli.store {
            self.store.path = Some(path.clone());
        }
        if let Some(key) = &cli.key {
            self.store.key = key.clone();
        }
        self
    }

    /// Storage location, falling back to the platform data directory.
    pub fn store_path(&self) -> PathBuf {
        let base = self.store.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("immo")
        });
        match self.store.backend {
            Backend::Redb if base.extension().is_none() => base.join("immo.redb"),
            _ => base,
        }
    }
}

/// `<config dir>/immo/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("immo").join("config.toml"))
}
