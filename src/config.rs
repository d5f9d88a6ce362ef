use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::theme::ThemeConfig;

pub const DEFAULT_DATA_FILE: &str = "events.json";
pub const DEFAULT_FALLBACK_COLOR: &str = "#000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Event file, relative to the working directory unless absolute.
    pub data_file: PathBuf,
    /// Colour for events and categories without `ActSerColor`.
    pub fallback_color: String,
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            fallback_color: DEFAULT_FALLBACK_COLOR.to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    /// Load `explicit` if given, else the per-user config file if it
    /// exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("planner-tui").join("config.toml"))
}
