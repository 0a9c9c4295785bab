use serde::Serialize;
use tracing::warn;

use super::{OperatorCode, radio_interface_name};
use crate::services::nas::{
    messages::{NetworkScanOutput, ScanElement},
    types::NetworkStatus,
};

/// Network found by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedNetwork {
    /// Position in the reported list.
    pub index: usize,
    /// Mobile country code.
    pub mcc: u16,
    /// Mobile network code.
    pub mnc: u16,
    /// Network status flags.
    pub status: String,
    /// Network description.
    pub description: String,
}

/// Radio access technology of a scanned network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedTechnology {
    /// Position in the reported list.
    pub index: usize,
    /// Mobile country code.
    pub mcc: u16,
    /// Mobile network code.
    pub mnc: u16,
    /// Radio access technology.
    pub rat: String,
}

/// Three-digit MNC information of a scanned network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScannedOperator {
    /// Position in the reported list.
    pub index: usize,
    /// Operator code.
    #[serde(flatten)]
    pub code: OperatorCode,
}

/// Decoded network scan.
///
/// Entries keep their position in the reported list, so skipped malformed
/// entries leave a gap rather than shifting the ones after them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkScanReport {
    /// Networks found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<ScannedNetwork>>,
    /// Radio access technologies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_access_technologies: Option<Vec<ScannedTechnology>>,
    /// Three-digit MNC information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnc_pcs_digits: Option<Vec<ScannedOperator>>,
}

impl NetworkScanReport {
    /// Decodes the present lists of a successful response.
    pub fn decode(output: &NetworkScanOutput) -> Self {
        Self {
            networks: decode_list(
                output.network_information.as_deref(),
                "network information",
                |index, e| ScannedNetwork {
                    index,
                    mcc: e.mcc,
                    mnc: e.mnc,
                    status: NetworkStatus::from_raw(e.network_status).describe(),
                    description: e.description.clone(),
                },
            ),
            radio_access_technologies: decode_list(
                output.radio_access_technology.as_deref(),
                "radio access technology",
                |index, e| ScannedTechnology {
                    index,
                    mcc: e.mcc,
                    mnc: e.mnc,
                    rat: radio_interface_name(e.radio_interface),
                },
            ),
            mnc_pcs_digits: decode_list(
                output.mnc_pcs_digit_include_status.as_deref(),
                "MNC PCS digit include status",
                |index, e| ScannedOperator {
                    index,
                    code: OperatorCode {
                        mcc: e.mcc,
                        mnc: e.mnc,
                        includes_pcs_digit: e.includes_pcs_digit,
                    },
                },
            ),
        }
    }
}

fn decode_list<T, R>(
    elements: Option<&[ScanElement<T>]>,
    list: &str,
    decode: impl Fn(usize, &T) -> R,
) -> Option<Vec<R>> {
    let elements = elements?;

    let decoded = elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| match element {
            ScanElement::Parsed(value) => Some(decode(index, value)),
            ScanElement::Malformed { malformed } => {
                warn!(list, index, reason = %malformed, "Skipping malformed network scan entry");
                None
            }
        })
        .collect();

    Some(decoded)
}
