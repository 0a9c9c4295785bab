//! Formatting utilities for CLI output.
//!
//! Reports are rendered either as the labelled text layout or as a JSON
//! document. Diagnostics get a red `error:` prefix when colour is enabled.

mod text;

use serde::Serialize;

pub use text::{confirmation, render_text};

use super::CliError;
use crate::{
    config::OutputFormat,
    services::nas::{Action, Report},
};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats a diagnostic line, colouring the prefix when asked to.
pub fn format_error(message: &str, color: bool) -> String {
    if color {
        format!("{}{}error:{} {message}", Colors::BOLD, Colors::RED, Colors::RESET)
    } else {
        format!("error: {message}")
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    device: &'a str,
    action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a Report>,
}

/// Renders a report as a pretty-printed JSON document.
///
/// Actions without a report body (reset, no-op) carry only the device and
/// action.
///
/// # Errors
/// Returns `CliError::Serialization` if the report cannot be serialized.
pub fn render_json(device: &str, action: Action, report: &Report) -> Result<String, CliError> {
    let body = match report {
        Report::Reset | Report::Noop => None,
        report => Some(report),
    };

    serde_json::to_string_pretty(&JsonReport {
        device,
        action,
        report: body,
    })
    .map_err(|e| CliError::Serialization(e.to_string()))
}

/// Renders a report in the requested format.
///
/// # Errors
/// Returns `CliError::Serialization` if JSON rendering fails.
pub fn render(
    format: OutputFormat,
    device: &str,
    action: Action,
    report: &Report,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(device, action, report)),
        OutputFormat::Json => render_json(device, action, report),
    }
}
