use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file picked up when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "ability_metadata.ron";

/// Settings for one generator run. Every field has a default, so an empty
/// RON struct `()` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub parallel: bool,
    /// How many classified abilities the run summary prints.
    pub summary_examples: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/abilities.json"),
            output_path: PathBuf::from("data/ability_metadata.json"),
            parallel: true,
            summary_examples: 5,
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from RON text.
    pub fn from_ron(content: &str, origin: &Path) -> ConfigResult<Self> {
        ron::from_str(content).map_err(|source| ConfigError::ParseRon {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a configuration file that must exist.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&content, path)
    }

    /// Resolve the configuration for a run: an explicit path must load, the
    /// default location is optional and falls back to built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> ConfigResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    debug!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }
}
