//! Request and response records exchanged with the NAS client.
//!
//! Responses are sparse: apart from the mandatory result status every field
//! is an independent `Option`. Values are kept in their raw wire form; the
//! decoders in [`super::decode`] turn them into reports.

mod preference;
mod scan;
mod serving_system;
mod signal;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use preference::*;
pub use scan::*;
pub use serving_system::*;
pub use signal::*;

use super::{action::Action, types::SignalStrengthRequest};

/// Error reported by the modem in a response's result status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    /// Protocol error code.
    pub code: u16,
    /// Human readable error description.
    pub message: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for ServiceError {}

/// Mandatory result status carried by every response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResultStatus {
    /// The operation succeeded.
    #[default]
    Success,
    /// The service rejected the operation.
    Failure {
        /// Protocol error code.
        code: u16,
        /// Human readable error description.
        message: String,
    },
}

impl ResultStatus {
    /// Returns the service error for a failed result.
    ///
    /// # Errors
    /// Returns `ServiceError` when the status is `Failure`.
    pub fn check(&self) -> Result<(), ServiceError> {
        match self {
            ResultStatus::Success => Ok(()),
            ResultStatus::Failure { code, message } => Err(ServiceError {
                code: *code,
                message: message.clone(),
            }),
        }
    }
}

/// A NAS response record.
pub trait NasOutput {
    /// Result status of the response.
    fn result(&self) -> &ResultStatus;
}

macro_rules! impl_nas_output {
    ($($output:ty),+ $(,)?) => {
        $(
            impl NasOutput for $output {
                fn result(&self) -> &ResultStatus {
                    &self.result
                }
            }
        )+
    };
}

impl_nas_output!(
    GetSignalStrengthOutput,
    GetSignalInfoOutput,
    GetServingSystemOutput,
    GetTechnologyPreferenceOutput,
    GetSystemSelectionPreferenceOutput,
    NetworkScanOutput,
    ResetOutput,
);

/// Input for a signal strength query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalStrengthInput {
    /// Measurements to request.
    pub request_mask: SignalStrengthRequest,
}

impl Default for SignalStrengthInput {
    fn default() -> Self {
        Self {
            request_mask: SignalStrengthRequest::reported(),
        }
    }
}

/// Response to a NAS service reset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResetOutput {
    /// Result status.
    pub result: ResultStatus,
}

/// A request ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Get signal strength.
    GetSignalStrength(SignalStrengthInput),
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
}

impl Request {
    /// Builds the request for an action. `Noop` has no request.
    pub fn for_action(action: Action) -> Option<Self> {
        match action {
            Action::GetSignalStrength => {
                Some(Request::GetSignalStrength(SignalStrengthInput::default()))
            }
            Action::GetSignalInfo => Some(Request::GetSignalInfo),
            Action::GetServingSystem => Some(Request::GetServingSystem),
            Action::GetTechnologyPreference => Some(Request::GetTechnologyPreference),
            Action::GetSystemSelectionPreference => Some(Request::GetSystemSelectionPreference),
            Action::NetworkScan => Some(Request::NetworkScan),
            Action::Reset => Some(Request::Reset),
            Action::Noop => None,
        }
    }
}

/// A response received for a submitted request.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Signal strength.
    SignalStrength(GetSignalStrengthOutput),
    /// Signal info.
    SignalInfo(GetSignalInfoOutput),
    /// Serving system.
    ServingSystem(GetServingSystemOutput),
    /// Technology preference.
    TechnologyPreference(GetTechnologyPreferenceOutput),
    /// System selection preference.
    SystemSelectionPreference(GetSystemSelectionPreferenceOutput),
    /// Network scan.
    NetworkScan(NetworkScanOutput),
    /// Service reset.
    Reset(ResetOutput),
    /// No request was submitted.
    Noop,
}
