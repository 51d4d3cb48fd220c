//! Configuration file handling for Decaf projects.

use anyhow::{Context, Result};
use decaf_core::AnalysisOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "decaf.toml";

/// Represents the decaf.toml configuration file.
///
/// Every table is optional; a missing table takes its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisOptions,
}

impl Config {
    /// Creates a configuration with the standard analysis rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a decaf.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, cannot be parsed, or holds
    /// options the analyzer rejects.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config
            .analysis
            .validate()
            .with_context(|| format!("Invalid [analysis] table in {}", path.display()))?;
        Ok(config)
    }

    /// Saves configuration to a decaf.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Finds decaf.toml starting from the current directory.
    ///
    /// # Errors
    /// Returns an error if no decaf.toml is found in the current or parent directories.
    pub fn find() -> Result<(Self, PathBuf)> {
        let current_dir =
            std::env::current_dir().with_context(|| "Failed to get current directory")?;
        Self::find_from(current_dir)
    }

    /// Finds decaf.toml starting from `start` and walking up its parents.
    ///
    /// Returns the configuration and the directory that holds it.
    ///
    /// # Errors
    /// Returns an error if no decaf.toml is found or the one found is invalid.
    pub fn find_from(start: impl Into<PathBuf>) -> Result<(Self, PathBuf)> {
        let mut current_dir = start.into();

        loop {
            let config_path = current_dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok((config, current_dir));
            }

            if !current_dir.pop() {
                anyhow::bail!(
                    "Could not find {CONFIG_FILE} in current directory or any parent directory"
                );
            }
        }
    }
}
