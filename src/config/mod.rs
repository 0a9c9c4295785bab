//! Configuration schema and loading.
//!
//! Settings live in `$XDG_CONFIG_HOME/nasctl/config.toml`. Every section is
//! optional and falls back to its defaults; command-line flags override the
//! file.

mod error;
mod general;
mod output;
mod paths;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use general::{GeneralConfig, LogLevel};
pub use output::{OutputConfig, OutputFormat};
pub use paths::ConfigPaths;

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default modem device.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Replay file used when no device is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Main configuration structure.
///
/// All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Report output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Default device.
    #[serde(default)]
    pub device: DeviceConfig,
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicitly given file must exist. The default file is optional:
    /// when it is missing the defaults are used.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or is not valid TOML.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let path = ConfigPaths::main_config().map_err(ConfigError::Location)?;
                Self::load_optional(&path)
            }
        }
    }

    /// Loads `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Config, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Config::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Loads `path`, which must exist.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
        let config = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            location: path.to_path_buf(),
            details: e.to_string(),
        })?;

        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}
