//! Command-line interface for NAS queries.
//!
//! Parses the mutually exclusive `--nas-*` flags, runs the one selected
//! action against a modem device and renders its report.

mod args;
pub mod formatting;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use args::{ActionFlags, ActionSelector, Cli};
pub use service::CliService;
pub use types::{CliError, CommandResult};
