//! Turns sparse NAS responses into unit-converted reports.
//!
//! Every decoder checks the result status first and walks the optional
//! fields in a fixed order. A field that is absent in the response is absent
//! in the report; nothing is synthesized.

mod network_scan;
mod serving_system;
mod signal_info;
mod signal_strength;
mod system_selection;
mod technology_preference;

#[cfg(test)]
mod tests;

use serde::Serialize;

pub use network_scan::*;
pub use serving_system::*;
pub use signal_info::*;
pub use signal_strength::*;
pub use system_selection::*;
pub use technology_preference::*;

use super::{
    action::Action,
    error::NasError,
    messages::{MncPcsDigitIncludeStatus, NasOutput, Response},
    types::{RadioInterface, enum_name},
};

/// A value measured on a named radio interface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkReading<T> {
    /// Radio interface name.
    pub network: String,
    /// Converted value.
    pub value: T,
}

impl<T> NetworkReading<T> {
    pub(crate) fn new(radio_interface: i8, value: T) -> Self {
        Self {
            network: radio_interface_name(radio_interface),
            value,
        }
    }

    pub(crate) fn on(interface: RadioInterface, value: T) -> Self {
        Self {
            network: interface.to_string(),
            value,
        }
    }
}

/// MCC/MNC pair with three-digit MNC information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorCode {
    /// Mobile country code.
    pub mcc: u16,
    /// Mobile network code.
    pub mnc: u16,
    /// Whether the MNC includes the PCS digit.
    pub includes_pcs_digit: bool,
}

impl From<&MncPcsDigitIncludeStatus> for OperatorCode {
    fn from(status: &MncPcsDigitIncludeStatus) -> Self {
        Self {
            mcc: status.mcc,
            mnc: status.mnc,
            includes_pcs_digit: status.includes_pcs_digit,
        }
    }
}

/// Decoded result of one action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// Signal strength.
    SignalStrength(SignalStrengthReport),
    /// Signal info.
    SignalInfo(SignalInfoReport),
    /// Serving system.
    ServingSystem(ServingSystemReport),
    /// Technology preference.
    TechnologyPreference(TechnologyPreferenceReport),
    /// System selection preference.
    SystemSelectionPreference(SystemSelectionReport),
    /// Network scan.
    NetworkScan(NetworkScanReport),
    /// Service reset; nothing beyond the confirmation.
    Reset,
    /// No-op; nothing beyond the confirmation.
    Noop,
}

impl Report {
    /// Decodes the response received for `action`.
    ///
    /// # Errors
    /// Returns `NasError::Service` when the response carries a failed
    /// result status. No field is decoded in that case.
    pub fn decode(action: Action, response: &Response) -> Result<Self, NasError> {
        let report = match response {
            Response::SignalStrength(output) => {
                checked(action, output)?;
                Report::SignalStrength(SignalStrengthReport::decode(output))
            }
            Response::SignalInfo(output) => {
                checked(action, output)?;
                Report::SignalInfo(SignalInfoReport::decode(output))
            }
            Response::ServingSystem(output) => {
                checked(action, output)?;
                Report::ServingSystem(ServingSystemReport::decode(output))
            }
            Response::TechnologyPreference(output) => {
                checked(action, output)?;
                Report::TechnologyPreference(TechnologyPreferenceReport::decode(output))
            }
            Response::SystemSelectionPreference(output) => {
                checked(action, output)?;
                Report::SystemSelectionPreference(SystemSelectionReport::decode(output))
            }
            Response::NetworkScan(output) => {
                checked(action, output)?;
                Report::NetworkScan(NetworkScanReport::decode(output))
            }
            Response::Reset(output) => {
                checked(action, output)?;
                Report::Reset
            }
            Response::Noop => Report::Noop,
        };

        Ok(report)
    }
}

fn checked(action: Action, output: &impl NasOutput) -> Result<(), NasError> {
    output
        .result()
        .check()
        .map_err(|source| NasError::service(action, source))
}

pub(crate) fn radio_interface_name(raw: i8) -> String {
    enum_name::<RadioInterface>(raw, "radio interface")
}
