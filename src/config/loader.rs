//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine's
//! metadata and rate history from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::calculation::{RateSource, RateTable, resolve_rate};
use crate::error::{EngineError, EngineResult};
use crate::models::{RateKind, RateSet};

use super::types::{EngineConfig, EngineMetadata};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── engine.yaml        # Installation metadata
/// └── rates/
///     └── *.yaml         # One rate set snapshot per file
/// ```
///
/// Each rate file holds one [`RateSet`]. Files are never edited; a rate
/// change is a new file with a later `created_at`.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::RateKind;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let rates = loader.resolve(RateKind::Private).unwrap();
/// println!("Current awak rate: {}", rates.awak);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` or the `rates` directory is missing
    /// - Any file contains invalid YAML or a malformed rate set
    ///
    /// An empty `rates` directory is allowed; lookups then fail with
    /// `RateNotConfigured`.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let rates = Self::load_rates(&path.join("rates"))?;

        debug!(
            name = %metadata.name,
            rate_sets = rates.len(),
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(metadata, RateTable::from_history(rates)),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every rate file from the rates directory, in file name order.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateSet>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut paths: Vec<PathBuf> = entries
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()
            .map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;
        paths.retain(|p| p.extension().is_some_and(|ext| ext == "yaml"));
        paths.sort();

        if paths.is_empty() {
            warn!(path = %rates_dir_str, "No rate files found");
        }

        paths.iter().map(|p| Self::load_yaml::<RateSet>(p)).collect()
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the installation metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the loaded rate history.
    pub fn rates(&self) -> &RateTable {
        self.config.rates()
    }

    /// Resolves the current rate set of a kind.
    pub fn resolve(&self, kind: RateKind) -> EngineResult<RateSet> {
        resolve_rate(self, kind)
    }
}

impl RateSource for ConfigLoader {
    fn latest_rate(&self, kind: RateKind) -> Option<RateSet> {
        self.rates().latest_rate(kind)
    }
}
