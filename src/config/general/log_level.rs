use serde::{Deserialize, Serialize};
use std::fmt;

/// Logging level for diagnostics on stderr.
///
/// Controls the verbosity of log output, from critical errors only
/// to detailed trace information.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only show errors.
    Error,

    /// Show warnings and errors, such as out-of-range values in a response
    /// (default level).
    #[default]
    Warn,

    /// Show operation outcomes, warnings, and errors.
    Info,

    /// Show request progress and client lifecycle.
    Debug,

    /// Show everything, including span entry and exit.
    Trace,
}

impl LogLevel {
    /// The more verbose of the two levels.
    pub fn max_verbosity(self, other: LogLevel) -> LogLevel {
        self.max(other)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
