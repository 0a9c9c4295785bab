use serde::{Deserialize, Serialize};

use super::ResultStatus;

/// Registration and attach state of the serving system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServingSystem {
    /// Raw registration state.
    pub registration_state: u8,
    /// Raw circuit switched attach state.
    pub cs_attach_state: u8,
    /// Raw packet switched attach state.
    pub ps_attach_state: u8,
    /// Raw selected network type.
    pub selected_network: u8,
    /// Raw radio interfaces in use.
    pub radio_interfaces: Vec<i8>,
}

/// Current PLMN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPlmn {
    /// Mobile country code.
    pub mcc: u16,
    /// Mobile network code.
    pub mnc: u16,
    /// Network description.
    pub description: String,
}

/// CDMA system and network identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdmaSystemId {
    /// System ID.
    pub sid: u16,
    /// Network ID.
    pub nid: u16,
}

/// CDMA base station identity and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdmaBaseStationInfo {
    /// Base station ID.
    pub base_station_id: u16,
    /// Latitude in 0.25 arc-second units.
    pub latitude: i32,
    /// Longitude in 0.25 arc-second units.
    pub longitude: i32,
}

/// Roaming indicator of one radio interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoamingIndicatorListElement {
    /// Raw radio interface.
    pub radio_interface: i8,
    /// Raw roaming indicator.
    pub roaming_indicator: u8,
}

/// 3GPP2 time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZone3gpp2 {
    /// Leap seconds since the start of CDMA time.
    pub leap_seconds: u8,
    /// Local time offset in 30 minute units.
    pub local_time_offset: i8,
    /// Whether daylight saving time is in effect.
    pub daylight_saving_time: bool,
}

/// Detailed service status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedServiceStatus {
    /// Raw service status.
    pub status: u8,
    /// Raw service capability (domain).
    pub capability: u8,
    /// Raw HDR service status.
    pub hdr_status: u8,
    /// HDR hybrid mode.
    pub hdr_hybrid: bool,
    /// Whether the system is forbidden.
    pub forbidden: bool,
}

/// CDMA system info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdmaSystemInfo {
    /// Mobile country code.
    pub mcc: u16,
    /// IMSI digits 11 and 12.
    pub imsi_11_12: u8,
}

/// Call barring status per domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallBarring {
    /// Raw circuit switched barring status.
    pub cs_status: i32,
    /// Raw packet switched barring status.
    pub ps_status: i32,
}

/// Operator code with three-digit MNC information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MncPcsDigitIncludeStatus {
    /// Mobile country code.
    pub mcc: u16,
    /// Mobile network code.
    pub mnc: u16,
    /// Whether the MNC includes the PCS digit.
    pub includes_pcs_digit: bool,
}

/// Response to a serving system query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetServingSystemOutput {
    /// Result status.
    pub result: ResultStatus,
    /// Registration and attach state.
    pub serving_system: Option<ServingSystem>,
    /// Raw roaming indicator.
    pub roaming_indicator: Option<u8>,
    /// Raw data service capabilities.
    pub data_service_capability: Option<Vec<u8>>,
    /// Current PLMN.
    pub current_plmn: Option<CurrentPlmn>,
    /// CDMA system ID.
    pub cdma_system_id: Option<CdmaSystemId>,
    /// CDMA base station info.
    pub cdma_base_station_info: Option<CdmaBaseStationInfo>,
    /// Roaming indicators per radio interface.
    pub roaming_indicator_list: Option<Vec<RoamingIndicatorListElement>>,
    /// Raw default roaming indicator.
    pub default_roaming_indicator: Option<u8>,
    /// 3GPP2 time zone.
    pub time_zone_3gpp2: Option<TimeZone3gpp2>,
    /// CDMA protocol revision.
    pub cdma_p_rev: Option<u8>,
    /// 3GPP time zone in 15 minute units.
    pub time_zone_3gpp: Option<i8>,
    /// 3GPP daylight saving time adjustment in hours.
    pub daylight_saving_time_adjustment_3gpp: Option<u8>,
    /// 3GPP location area code.
    pub lac_3gpp: Option<u16>,
    /// 3GPP cell ID.
    pub cid_3gpp: Option<u32>,
    /// 3GPP2 concurrent service availability.
    pub concurrent_service_info_3gpp2: Option<bool>,
    /// 3GPP2 PRL indicator.
    pub prl_indicator_3gpp2: Option<bool>,
    /// Dual transfer mode support.
    pub dual_transfer_mode_supported: Option<bool>,
    /// Detailed service status.
    pub detailed_service_status: Option<DetailedServiceStatus>,
    /// CDMA system info.
    pub cdma_system_info: Option<CdmaSystemInfo>,
    /// Raw HDR personality.
    pub hdr_personality: Option<u8>,
    /// LTE tracking area code.
    pub lte_tac: Option<u16>,
    /// Call barring status.
    pub call_barring_status: Option<CallBarring>,
    /// UMTS primary scrambling code.
    pub umts_primary_scrambling_code: Option<u16>,
    /// Full operator code.
    pub mnc_pcs_digit_include_status: Option<MncPcsDigitIncludeStatus>,
}
