use thiserror::Error;

use crate::{
    config::ConfigError,
    services::nas::{NasError, ReplayError},
};

/// Errors that can occur while running a NAS command.
///
/// Every variant renders as the single diagnostic line printed before the
/// process exits with a failure status.
#[derive(Error, Debug)]
pub enum CliError {
    /// More than one NAS action flag was given.
    ///
    /// Detected before any device is opened or request issued.
    #[error("too many NAS actions requested ({count} given)")]
    TooManyActions {
        /// Number of action flags set
        count: usize,
    },

    /// No NAS action flag was given.
    #[error("no NAS action requested")]
    NoAction,

    /// Neither the command line nor the config file names a device.
    #[error("no device given: pass --device or set [device] path in the config file")]
    NoDevice,

    /// The NAS operation failed.
    #[error(transparent)]
    Nas(#[from] NasError),

    /// The device could not be opened.
    #[error(transparent)]
    Device(#[from] ReplayError),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The report could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Type alias for command execution results.
///
/// Carries the text to print on stdout, or the error to report.
pub type CommandResult = Result<String, CliError>;
