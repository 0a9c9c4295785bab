use serde::{Deserialize, Serialize};

use super::{MncPcsDigitIncludeStatus, ResultStatus};

/// Active technology preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTechnologyPreference {
    /// Raw technology preference mask.
    pub technology_preference: u16,
    /// Raw preference duration.
    pub duration: u8,
}

/// Response to a technology preference query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTechnologyPreferenceOutput {
    /// Result status.
    pub result: ResultStatus,
    /// Active preference.
    pub active: Option<ActiveTechnologyPreference>,
    /// Raw persistent technology preference mask.
    pub persistent: Option<u16>,
}

/// Response to a system selection preference query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetSystemSelectionPreferenceOutput {
    /// Result status.
    pub result: ResultStatus,
    /// Emergency mode.
    pub emergency_mode: Option<bool>,
    /// Raw RAT mode preference mask.
    pub mode_preference: Option<u16>,
    /// Raw band preference mask.
    pub band_preference: Option<u64>,
    /// Raw LTE band preference mask.
    pub lte_band_preference: Option<u64>,
    /// Raw TD-SCDMA band preference mask.
    pub td_scdma_band_preference: Option<u64>,
    /// Raw CDMA PRL preference.
    pub cdma_prl_preference: Option<u16>,
    /// Raw roaming preference.
    pub roaming_preference: Option<u16>,
    /// Raw network selection preference.
    pub network_selection_preference: Option<u8>,
    /// Raw service domain preference.
    pub service_domain_preference: Option<u32>,
    /// Raw GSM/WCDMA acquisition order preference.
    pub gsm_wcdma_acquisition_order_preference: Option<u32>,
    /// Manually selected network.
    pub manual_network_selection: Option<MncPcsDigitIncludeStatus>,
}
