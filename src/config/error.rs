use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration directory could not be determined.
    #[error("could not locate config directory: {0}")]
    Location(#[source] io::Error),

    /// I/O operation error
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Path where the I/O error occurred
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParse {
        /// File being parsed
        location: PathBuf,
        /// Parse error details
        details: String,
    },
}
