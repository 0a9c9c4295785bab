use serde::{Deserialize, Serialize};

use super::ResultStatus;

/// One entry of a network scan list.
///
/// The transport hands over entries it could not parse as `Malformed`
/// instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScanElement<T> {
    /// A well-formed entry.
    Parsed(T),
    /// An entry whose encoding could not be parsed.
    Malformed {
        /// Why the entry was rejected.
        malformed: String,
    },
}

/// Network found by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInformationElement {
    /// Mobile country code.
    pub mcc: u16,
    /// Mobile network code.
    pub mnc: u16,
    /// Raw network status mask.
    pub network_status: u8,
    /// Network description.
    pub description: String,
}

/// Radio access technology of a scanned network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioAccessTechnologyElement {
    /// Mobile country code.
    pub mcc: u16,
    /// Mobile network code.
    pub mnc: u16,
    /// Raw radio interface.
    pub radio_interface: i8,
}

/// Three-digit MNC information of a scanned network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MncPcsDigitElement {
    /// Mobile country code.
    pub mcc: u16,
    /// Mobile network code.
    pub mnc: u16,
    /// Whether the MNC includes the PCS digit.
    pub includes_pcs_digit: bool,
}

/// Response to a network scan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkScanOutput {
    /// Result status.
    pub result: ResultStatus,
    /// Networks found.
    pub network_information: Option<Vec<ScanElement<NetworkInformationElement>>>,
    /// Radio access technology per network.
    pub radio_access_technology: Option<Vec<ScanElement<RadioAccessTechnologyElement>>>,
    /// Three-digit MNC information per network.
    pub mnc_pcs_digit_include_status: Option<Vec<ScanElement<MncPcsDigitElement>>>,
}
