use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled sections with quoted values.
    #[default]
    Text,
    /// A JSON document with device, action and report.
    Json,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Colour the error prefix on stderr.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}
