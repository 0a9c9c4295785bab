use std::{fmt, time::Duration};

use serde::Serialize;

/// Timeout applied to every NAS request except network scans.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Network scans take a long time to complete.
pub const NETWORK_SCAN_TIMEOUT: Duration = Duration::from_secs(300);

/// The single operation performed by one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Get signal strength.
    GetSignalStrength,
    /// Get signal info.
    GetSignalInfo,
    /// Get serving system.
    GetServingSystem,
    /// Get technology preference.
    GetTechnologyPreference,
    /// Get system selection preference.
    GetSystemSelectionPreference,
    /// Scan networks.
    NetworkScan,
    /// Reset the service state.
    Reset,
    /// Allocate and release a client without sending a request.
    Noop,
}

impl Action {
    /// Every action, in flag declaration order.
    pub const ALL: [Action; 8] = [
        Action::GetSignalStrength,
        Action::GetSignalInfo,
        Action::GetServingSystem,
        Action::GetTechnologyPreference,
        Action::GetSystemSelectionPreference,
        Action::NetworkScan,
        Action::Reset,
        Action::Noop,
    ];

    /// Time allowed for the modem to answer.
    pub fn timeout(self) -> Duration {
        match self {
            Action::NetworkScan => NETWORK_SCAN_TIMEOUT,
            _ => DEFAULT_TIMEOUT,
        }
    }

    /// What is being done, for progress logging.
    pub fn progress(self) -> &'static str {
        match self {
            Action::GetSignalStrength => "getting signal strength",
            Action::GetSignalInfo => "getting signal info",
            Action::GetServingSystem => "getting serving system",
            Action::GetTechnologyPreference => "getting technology preference",
            Action::GetSystemSelectionPreference => "getting system selection preference",
            Action::NetworkScan => "scanning networks",
            Action::Reset => "resetting NAS service",
            Action::Noop => "running no-op",
        }
    }

    /// Object of the failure message when the modem rejects the request.
    pub fn failure_context(self) -> &'static str {
        match self {
            Action::GetSignalStrength => "couldn't get signal strength",
            Action::GetSignalInfo => "couldn't get signal info",
            Action::GetServingSystem => "couldn't get serving system",
            Action::GetTechnologyPreference => "couldn't get technology preference",
            Action::GetSystemSelectionPreference => "couldn't get system selection preference",
            Action::NetworkScan => "couldn't scan networks",
            Action::Reset => "couldn't reset the NAS service",
            Action::Noop => "couldn't run no-op",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::GetSignalStrength => "get-signal-strength",
            Action::GetSignalInfo => "get-signal-info",
            Action::GetServingSystem => "get-serving-system",
            Action::GetTechnologyPreference => "get-technology-preference",
            Action::GetSystemSelectionPreference => "get-system-selection-preference",
            Action::NetworkScan => "network-scan",
            Action::Reset => "reset",
            Action::Noop => "noop",
        };
        f.write_str(name)
    }
}
