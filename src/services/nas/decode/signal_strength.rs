use serde::Serialize;

use super::NetworkReading;
use crate::services::nas::{
    messages::GetSignalStrengthOutput,
    types::RadioInterface,
    units::{ecio_to_dbm, lte_snr_to_db, rssi_magnitude_to_dbm, sinr_level_to_db},
};

/// EV-DO SINR as reported and converted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SinrReading {
    /// Radio interface name.
    pub network: String,
    /// Raw SINR level.
    pub level: u8,
    /// SINR in dB.
    pub db: f64,
}

/// Decoded signal strength.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignalStrengthReport {
    /// Current strength in dBm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<NetworkReading<i8>>,
    /// Strength on other networks in dBm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<Vec<NetworkReading<i8>>>,
    /// RSSI per network in dBm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rssi: Option<Vec<NetworkReading<i16>>>,
    /// ECIO per network in dBm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecio: Option<Vec<NetworkReading<f64>>>,
    /// EV-DO received IO in dBm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub io: Option<NetworkReading<i32>>,
    /// EV-DO SINR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sinr: Option<SinrReading>,
    /// RSRQ in dB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsrq: Option<NetworkReading<i8>>,
    /// LTE SNR in dB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte_snr: Option<NetworkReading<f64>>,
    /// LTE RSRP in dBm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte_rsrp: Option<NetworkReading<i16>>,
}

impl SignalStrengthReport {
    /// Decodes the present fields of a successful response.
    pub fn decode(output: &GetSignalStrengthOutput) -> Self {
        Self {
            current: output
                .signal_strength
                .map(|s| NetworkReading::new(s.radio_interface, s.strength)),
            other: output.strength_list.as_ref().map(|list| {
                list.iter()
                    .map(|e| NetworkReading::new(e.radio_interface, e.strength))
                    .collect()
            }),
            rssi: output.rssi_list.as_ref().map(|list| {
                list.iter()
                    .map(|e| NetworkReading::new(e.radio_interface, rssi_magnitude_to_dbm(e.rssi)))
                    .collect()
            }),
            ecio: output.ecio_list.as_ref().map(|list| {
                list.iter()
                    .map(|e| {
                        NetworkReading::new(e.radio_interface, ecio_to_dbm(u16::from(e.ecio)))
                    })
                    .collect()
            }),
            io: output
                .io
                .map(|io| NetworkReading::on(RadioInterface::Cdma1xEvdo, io)),
            sinr: output.sinr.map(|level| SinrReading {
                network: RadioInterface::Cdma1xEvdo.to_string(),
                level,
                db: sinr_level_to_db(level),
            }),
            rsrq: output
                .rsrq
                .map(|r| NetworkReading::new(r.radio_interface, r.rsrq)),
            lte_snr: output
                .lte_snr
                .map(|snr| NetworkReading::on(RadioInterface::Lte, lte_snr_to_db(snr))),
            lte_rsrp: output
                .lte_rsrp
                .map(|rsrp| NetworkReading::on(RadioInterface::Lte, rsrp)),
        }
    }
}
