use serde::Serialize;

use crate::services::nas::{
    messages::GetSignalInfoOutput,
    units::{ecio_to_dbm, lte_snr_to_db, sinr_level_to_db},
};

/// RSSI and ECIO of a CDMA or WCDMA cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RssiEcio {
    /// RSSI in dBm.
    pub rssi_dbm: i8,
    /// ECIO in dBm.
    pub ecio_dbm: f64,
}

/// HDR signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HdrSignal {
    /// RSSI in dBm.
    pub rssi_dbm: i8,
    /// ECIO in dBm.
    pub ecio_dbm: f64,
    /// Raw SINR level.
    pub sinr_level: u8,
    /// SINR in dB.
    pub sinr_db: f64,
    /// Received IO in dBm.
    pub io_dbm: i32,
}

/// GSM signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GsmSignal {
    /// RSSI in dBm.
    pub rssi_dbm: i8,
}

/// LTE signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LteSignal {
    /// RSSI in dBm.
    pub rssi_dbm: i8,
    /// RSRQ in dB.
    pub rsrq_db: i8,
    /// RSRP in dBm.
    pub rsrp_dbm: i16,
    /// SNR in dB.
    pub snr_db: f64,
}

/// TD-SCDMA signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TdmaSignal {
    /// RSCP in dBm.
    pub rscp_dbm: i8,
}

/// Decoded per-technology signal info.
///
/// Each block is independent: one being present says nothing about another.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignalInfoReport {
    /// CDMA block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdma: Option<RssiEcio>,
    /// HDR block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdr: Option<HdrSignal>,
    /// GSM block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gsm: Option<GsmSignal>,
    /// WCDMA block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wcdma: Option<RssiEcio>,
    /// LTE block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<LteSignal>,
    /// TD-SCDMA block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tdma: Option<TdmaSignal>,
}

impl SignalInfoReport {
    /// Decodes the present blocks of a successful response.
    pub fn decode(output: &GetSignalInfoOutput) -> Self {
        Self {
            cdma: output.cdma_signal_strength.map(|s| RssiEcio {
                rssi_dbm: s.rssi,
                ecio_dbm: ecio_to_dbm(s.ecio),
            }),
            hdr: output.hdr_signal_strength.map(|s| HdrSignal {
                rssi_dbm: s.rssi,
                ecio_dbm: ecio_to_dbm(s.ecio),
                sinr_level: s.sinr_level,
                sinr_db: sinr_level_to_db(s.sinr_level),
                io_dbm: s.io,
            }),
            gsm: output
                .gsm_signal_strength
                .map(|rssi| GsmSignal { rssi_dbm: rssi }),
            wcdma: output.wcdma_signal_strength.map(|s| RssiEcio {
                rssi_dbm: s.rssi,
                ecio_dbm: ecio_to_dbm(s.ecio),
            }),
            lte: output.lte_signal_strength.map(|s| LteSignal {
                rssi_dbm: s.rssi,
                rsrq_db: s.rsrq,
                rsrp_dbm: s.rsrp,
                snr_db: lte_snr_to_db(s.snr),
            }),
            tdma: output
                .tdma_signal_strength
                .map(|rscp| TdmaSignal { rscp_dbm: rscp }),
        }
    }
}
