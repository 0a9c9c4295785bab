//! Raw measurement to physical unit conversions.
//!
//! Every conversion is a fixed scale applied in one step; callers must not
//! reorder or fold the arithmetic, so results stay bit-identical to what the
//! modem firmware documentation prescribes.

use tracing::warn;

/// Reported for SINR ordinals outside the 0..=8 table.
pub const INVALID_SINR_DB: f64 = f64::MIN;

const SINR_LEVEL_DB: [f64; 9] = [-9.0, -6.0, -4.5, -3.0, -2.0, 1.0, 3.0, 6.0, 9.0];

/// Converts an EV-DO SINR level (0..=8) to dB.
///
/// Unknown levels are logged and mapped to [`INVALID_SINR_DB`].
pub fn sinr_level_to_db(level: u8) -> f64 {
    match SINR_LEVEL_DB.get(usize::from(level)) {
        Some(db) => *db,
        None => {
            warn!("Invalid SINR level '{level}'");
            INVALID_SINR_DB
        }
    }
}

/// ECIO raw units (-0.5 dB steps) to dBm.
pub fn ecio_to_dbm(raw: u16) -> f64 {
    (-0.5) * f64::from(raw)
}

/// LTE SNR raw units (0.1 dB steps) to dB.
pub fn lte_snr_to_db(raw: i16) -> f64 {
    0.1 * f64::from(raw)
}

/// CDMA base station latitude/longitude (0.25 arc-second units) to degrees.
pub fn coordinate_to_degrees(raw: i32) -> f64 {
    (f64::from(raw) * 0.25) / 3600.0
}

/// 3GPP2 local time offset (30 minute units) to minutes.
pub fn local_time_offset_to_minutes(raw: i8) -> i32 {
    i32::from(raw) * 30
}

/// 3GPP time zone (15 minute units) to minutes.
pub fn time_zone_to_minutes(raw: i8) -> i32 {
    i32::from(raw) * 15
}

/// RSSI list magnitude (positive) to dBm.
pub fn rssi_magnitude_to_dbm(raw: u8) -> i16 {
    -i16::from(raw)
}
