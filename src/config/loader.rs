//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{DenominationSet, EngineConfig};

/// Loads and provides access to the engine configuration.
///
/// The configuration is a single YAML file listing the denomination
/// values, largest first:
///
/// ```text
/// denominations: [100, 50, 20, 10, 5, 1]
/// ```
///
/// # Example
///
/// ```no_run
/// use tip_pool_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/denominations.yaml").unwrap();
/// assert!(loader.denominations().contains(100));
/// ```
///
/// When no file is shipped, [`ConfigLoader::default`] provides the
/// built-in denomination set.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The denomination list fails validation (`ConfigParseError`,
    ///   since the invalid values came from the file)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Creates a loader from an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the configured denomination set.
    pub fn denominations(&self) -> &DenominationSet {
        &self.config.denominations
    }
}
