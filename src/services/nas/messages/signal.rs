use serde::{Deserialize, Serialize};

use super::ResultStatus;

/// Current signal strength and the interface it was measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalStrength {
    /// Strength in dBm.
    pub strength: i8,
    /// Raw radio interface.
    pub radio_interface: i8,
}

/// Strength reported for one network in the strength list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthListElement {
    /// Strength in dBm.
    pub strength: i8,
    /// Raw radio interface.
    pub radio_interface: i8,
}

/// RSSI reported for one network, as a positive magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RssiListElement {
    /// RSSI magnitude; negate for dBm.
    pub rssi: u8,
    /// Raw radio interface.
    pub radio_interface: i8,
}

/// ECIO reported for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcioListElement {
    /// ECIO in -0.5 dB units.
    pub ecio: u8,
    /// Raw radio interface.
    pub radio_interface: i8,
}

/// RSRQ and the interface it was measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rsrq {
    /// RSRQ in dB.
    pub rsrq: i8,
    /// Raw radio interface.
    pub radio_interface: i8,
}

/// Response to a signal strength query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetSignalStrengthOutput {
    /// Result status.
    pub result: ResultStatus,
    /// Current signal strength.
    pub signal_strength: Option<SignalStrength>,
    /// Signal strength of other networks.
    pub strength_list: Option<Vec<StrengthListElement>>,
    /// RSSI per network.
    pub rssi_list: Option<Vec<RssiListElement>>,
    /// ECIO per network.
    pub ecio_list: Option<Vec<EcioListElement>>,
    /// Received IO on 1xEV-DO, dBm.
    pub io: Option<i32>,
    /// 1xEV-DO SINR level (0..=8).
    pub sinr: Option<u8>,
    /// RSRQ.
    pub rsrq: Option<Rsrq>,
    /// LTE SNR in 0.1 dB units.
    pub lte_snr: Option<i16>,
    /// LTE RSRP in dBm.
    pub lte_rsrp: Option<i16>,
}

/// CDMA signal block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdmaSignalStrength {
    /// RSSI in dBm.
    pub rssi: i8,
    /// ECIO in -0.5 dB units.
    pub ecio: u16,
}

/// HDR signal block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdrSignalStrength {
    /// RSSI in dBm.
    pub rssi: i8,
    /// ECIO in -0.5 dB units.
    pub ecio: u16,
    /// SINR level (0..=8).
    pub sinr_level: u8,
    /// Received IO in dBm.
    pub io: i32,
}

/// WCDMA signal block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcdmaSignalStrength {
    /// RSSI in dBm.
    pub rssi: i8,
    /// ECIO in -0.5 dB units.
    pub ecio: u16,
}

/// LTE signal block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LteSignalStrength {
    /// RSSI in dBm.
    pub rssi: i8,
    /// RSRQ in dB.
    pub rsrq: i8,
    /// RSRP in dBm.
    pub rsrp: i16,
    /// SNR in 0.1 dB units.
    pub snr: i16,
}

/// Response to a signal info query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetSignalInfoOutput {
    /// Result status.
    pub result: ResultStatus,
    /// CDMA signal block.
    pub cdma_signal_strength: Option<CdmaSignalStrength>,
    /// HDR signal block.
    pub hdr_signal_strength: Option<HdrSignalStrength>,
    /// GSM RSSI in dBm.
    pub gsm_signal_strength: Option<i8>,
    /// WCDMA signal block.
    pub wcdma_signal_strength: Option<WcdmaSignalStrength>,
    /// LTE signal block.
    pub lte_signal_strength: Option<LteSignalStrength>,
    /// TDMA RSCP in dBm.
    pub tdma_signal_strength: Option<i8>,
}
