mod log_level;

pub use log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Logging level for diagnostics.
    #[serde(default)]
    pub log_level: LogLevel,
}
