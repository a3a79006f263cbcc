//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rate
//! table from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollConfig;

/// Where the rate table is looked up, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/rates.yaml";

/// Loads and provides access to the pay configuration.
///
/// The file has the following shape (`boundaries` may be omitted, in which
/// case the standard 00:01 / 09:01 / 18:01 boundaries apply):
///
/// ```text
/// boundaries:
///   night_start: "00:01"
///   day_start: "09:01"
///   evening_start: "18:01"
/// rates:
///   weekday: { night: 25, day: 15, evening: 20 }
///   weekend: { night: 30, day: 20, evening: 25 }
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rates.yaml").unwrap();
/// println!("Weekday day rate: {}", loader.config().rates.weekday.day);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or invalid times (`ConfigParseError`)
    /// - The band boundaries are not in ascending order (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: PayrollConfig =
            serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        if !config.boundaries.is_ordered() {
            return Err(PayrollError::ConfigParseError {
                path: path_str,
                message: "band boundaries must be ascending: night_start < day_start < evening_start"
                    .to_string(),
            });
        }

        Ok(Self { config })
    }

    /// Loads configuration like [`ConfigLoader::load`], falling back to
    /// [`PayrollConfig::default`] when the file does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        match Self::load(path) {
            Err(PayrollError::ConfigNotFound { path }) => {
                debug!(path = %path, "Rate table not found, using built-in defaults");
                Ok(Self::from_config(PayrollConfig::default()))
            }
            other => other,
        }
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}
