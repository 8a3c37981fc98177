use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::category::CategoryPolicy;
use crate::errors::PodiumError;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "podium.toml";

/// Top-level configuration loaded from `podium.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodiumConfig {
    /// Category policy: excluded sets, merge rule, fallback.
    #[serde(default)]
    pub policy: CategoryPolicy,

    /// Output preferences.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format when the CLI flag is omitted.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_format() -> String {
    "terminal".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

impl PodiumConfig {
    /// Load configuration from an explicit path, or from `podium.toml` in
    /// the working directory. A missing implicit file yields the defaults;
    /// a missing explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, PodiumError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, PodiumError> {
        let content = fs::read_to_string(path).map_err(|e| PodiumError::io(path, e))?;
        let config: PodiumConfig =
            toml::from_str(&content).map_err(|source| PodiumError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        config.policy.validate().map_err(PodiumError::Policy)?;
        Ok(config)
    }
}
