use std::{path::PathBuf, sync::OnceLock};

use clap::{Args, Parser};
use tracing::debug;

use super::CliError;
use crate::{config::OutputFormat, services::nas::Action};

/// Command-line arguments.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "nasctl",
    version,
    about = "Query the network access service of a cellular modem"
)]
pub struct Cli {
    /// The NAS action to run. At most one may be given.
    #[command(flatten)]
    pub actions: ActionFlags,

    /// Modem device (a JSON replay file).
    #[arg(short, long, value_name = "FILE")]
    pub device: Option<PathBuf>,

    /// Configuration file to use instead of the default one.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Never colour diagnostics.
    #[arg(long)]
    pub no_color: bool,

    /// Log request progress to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// The mutually exclusive NAS action flags.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
#[command(next_help_heading = "NAS actions")]
pub struct ActionFlags {
    /// Get signal strength
    #[arg(long = "nas-get-signal-strength")]
    pub get_signal_strength: bool,

    /// Get signal info
    #[arg(long = "nas-get-signal-info")]
    pub get_signal_info: bool,

    /// Get serving system
    #[arg(long = "nas-get-serving-system")]
    pub get_serving_system: bool,

    /// Get technology preference
    #[arg(long = "nas-get-technology-preference")]
    pub get_technology_preference: bool,

    /// Get system selection preference
    #[arg(long = "nas-get-system-selection-preference")]
    pub get_system_selection_preference: bool,

    /// Scan networks
    #[arg(long = "nas-network-scan")]
    pub network_scan: bool,

    /// Reset the service state
    #[arg(long = "nas-reset")]
    pub reset: bool,

    /// Just allocate and release a NAS client
    #[arg(long = "nas-noop")]
    pub noop: bool,
}

impl ActionFlags {
    /// Whether the flag for `action` is set.
    pub fn is_set(&self, action: Action) -> bool {
        match action {
            Action::GetSignalStrength => self.get_signal_strength,
            Action::GetSignalInfo => self.get_signal_info,
            Action::GetServingSystem => self.get_serving_system,
            Action::GetTechnologyPreference => self.get_technology_preference,
            Action::GetSystemSelectionPreference => self.get_system_selection_preference,
            Action::NetworkScan => self.network_scan,
            Action::Reset => self.reset,
            Action::Noop => self.noop,
        }
    }

    /// Flags that are set, in declaration order.
    pub fn selected(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.is_set(*action))
            .collect()
    }
}

/// Decides which single action an invocation runs.
///
/// The verdict is computed on first use and cached, so every caller sees
/// the same answer no matter how often it asks.
#[derive(Debug)]
pub struct ActionSelector {
    flags: ActionFlags,
    verdict: OnceLock<Result<Option<Action>, usize>>,
}

impl ActionSelector {
    /// Creates a selector over parsed flags.
    pub fn new(flags: ActionFlags) -> Self {
        Self {
            flags,
            verdict: OnceLock::new(),
        }
    }

    /// The selected action, `None` if no action flag was given.
    ///
    /// # Errors
    /// Returns `CliError::TooManyActions` if more than one flag is set.
    pub fn select(&self) -> Result<Option<Action>, CliError> {
        let verdict = self.verdict.get_or_init(|| {
            let selected = self.flags.selected();
            debug!(?selected, "Evaluated NAS action flags");

            match selected.as_slice() {
                [] => Ok(None),
                [action] => Ok(Some(*action)),
                many => Err(many.len()),
            }
        });

        match verdict {
            Ok(action) => Ok(*action),
            Err(count) => Err(CliError::TooManyActions { count: *count }),
        }
    }

    /// Whether exactly one action was requested.
    ///
    /// # Errors
    /// Returns `CliError::TooManyActions` if more than one flag is set.
    pub fn options_enabled(&self) -> Result<bool, CliError> {
        Ok(self.select()?.is_some())
    }
}
