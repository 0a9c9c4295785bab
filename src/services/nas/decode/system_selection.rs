use serde::Serialize;

use super::OperatorCode;
use crate::services::nas::{
    messages::GetSystemSelectionPreferenceOutput,
    types::{
        BandPreference, CdmaPrlPreference, GsmWcdmaAcquisitionOrderPreference, LteBandPreference,
        NetworkSelectionPreference, RatModePreference, RoamingPreference, ServiceDomainPreference,
        TdScdmaBandPreference, enum_name,
    },
};

/// Decoded system selection preference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SystemSelectionReport {
    /// Emergency mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_mode: Option<bool>,
    /// Preferred RAT modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode_preference: Option<String>,
    /// Preferred bands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band_preference: Option<String>,
    /// Preferred LTE bands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte_band_preference: Option<String>,
    /// Preferred TD-SCDMA bands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub td_scdma_band_preference: Option<String>,
    /// CDMA PRL preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdma_prl_preference: Option<String>,
    /// Roaming preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roaming_preference: Option<String>,
    /// Network selection preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_selection_preference: Option<String>,
    /// Service domain preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_domain_preference: Option<String>,
    /// GSM/WCDMA acquisition order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gsm_wcdma_acquisition_order: Option<String>,
    /// Manually selected network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_network_selection: Option<OperatorCode>,
}

impl SystemSelectionReport {
    /// Decodes the present fields of a successful response.
    pub fn decode(output: &GetSystemSelectionPreferenceOutput) -> Self {
        Self {
            emergency_mode: output.emergency_mode,
            mode_preference: output
                .mode_preference
                .map(|raw| RatModePreference::from_raw(raw).describe()),
            band_preference: output
                .band_preference
                .map(|raw| BandPreference::from_raw(raw).describe()),
            lte_band_preference: output
                .lte_band_preference
                .map(|raw| LteBandPreference::from_raw(raw).describe()),
            td_scdma_band_preference: output
                .td_scdma_band_preference
                .map(|raw| TdScdmaBandPreference::from_raw(raw).describe()),
            cdma_prl_preference: output
                .cdma_prl_preference
                .map(|raw| enum_name::<CdmaPrlPreference>(raw, "CDMA PRL preference")),
            roaming_preference: output
                .roaming_preference
                .map(|raw| enum_name::<RoamingPreference>(raw, "roaming preference")),
            network_selection_preference: output.network_selection_preference.map(|raw| {
                enum_name::<NetworkSelectionPreference>(raw, "network selection preference")
            }),
            service_domain_preference: output
                .service_domain_preference
                .map(|raw| enum_name::<ServiceDomainPreference>(raw, "service domain preference")),
            gsm_wcdma_acquisition_order: output.gsm_wcdma_acquisition_order_preference.map(|raw| {
                enum_name::<GsmWcdmaAcquisitionOrderPreference>(raw, "acquisition order")
            }),
            manual_network_selection: output
                .manual_network_selection
                .as_ref()
                .map(OperatorCode::from),
        }
    }
}
