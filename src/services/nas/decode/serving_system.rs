use serde::Serialize;

use super::{NetworkReading, OperatorCode, radio_interface_name};
use crate::services::nas::{
    messages::GetServingSystemOutput,
    types::{
        AttachState, CallBarringStatus, DataCapability, HdrPersonality, NetworkServiceDomain,
        NetworkType, RegistrationState, RoamingIndicatorStatus, ServiceStatus, enum_name,
    },
    units::{coordinate_to_degrees, local_time_offset_to_minutes, time_zone_to_minutes},
};

/// Registration and attach state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// Registration state.
    pub registration_state: String,
    /// Circuit switched attach state.
    pub cs: String,
    /// Packet switched attach state.
    pub ps: String,
    /// Selected network type.
    pub selected_network: String,
    /// Radio interfaces in use, in reported order.
    pub radio_interfaces: Vec<String>,
}

/// Current PLMN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plmn {
    /// Mobile country code.
    pub mcc: u16,
    /// Mobile network code.
    pub mnc: u16,
    /// Network description.
    pub description: String,
}

/// CDMA system and network identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CdmaSystemIds {
    /// System ID.
    pub sid: u16,
    /// Network ID.
    pub nid: u16,
}

/// CDMA base station position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaseStation {
    /// Base station ID.
    pub id: u16,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// 3GPP2 time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServingTimeZone {
    /// Leap seconds.
    pub leap_seconds: u8,
    /// Local time offset in minutes.
    pub local_time_offset_minutes: i32,
    /// Daylight saving time in effect.
    pub daylight_saving_time: bool,
}

/// Detailed service status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedStatus {
    /// Service status.
    pub status: String,
    /// Service domain capability.
    pub capability: String,
    /// HDR service status.
    pub hdr_status: String,
    /// HDR hybrid mode.
    pub hdr_hybrid: bool,
    /// System is forbidden.
    pub forbidden: bool,
}

/// CDMA system info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CdmaSystem {
    /// Mobile country code.
    pub mcc: u16,
    /// IMSI digits 11 and 12.
    pub imsi_11_12: u8,
}

/// Call barring status per domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallBarringState {
    /// Circuit switched.
    pub circuit_switched: String,
    /// Packet switched.
    pub packet_switched: String,
}

/// Decoded serving system.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServingSystemReport {
    /// Registration and attach state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<Registration>,
    /// Roaming status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roaming_status: Option<String>,
    /// Data service capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_service_capabilities: Option<Vec<String>>,
    /// Current PLMN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_plmn: Option<Plmn>,
    /// CDMA system ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdma_system_id: Option<CdmaSystemIds>,
    /// CDMA base station.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdma_base_station: Option<BaseStation>,
    /// Roaming status per radio interface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roaming_indicators: Option<Vec<NetworkReading<String>>>,
    /// Default roaming status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_roaming_status: Option<String>,
    /// 3GPP2 time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone_3gpp2: Option<ServingTimeZone>,
    /// CDMA protocol revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdma_p_rev: Option<u8>,
    /// 3GPP time zone offset in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone_3gpp_minutes: Option<i32>,
    /// 3GPP daylight saving time adjustment in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daylight_saving_time_adjustment_hours: Option<u8>,
    /// 3GPP location area code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lac_3gpp: Option<u16>,
    /// 3GPP cell ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid_3gpp: Option<u32>,
    /// 3GPP2 concurrent service available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_service_3gpp2: Option<bool>,
    /// System is in the 3GPP2 PRL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prl_indicator_3gpp2: Option<bool>,
    /// Dual transfer mode supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dual_transfer_mode_supported: Option<bool>,
    /// Detailed service status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_status: Option<DetailedStatus>,
    /// CDMA system info.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdma_system_info: Option<CdmaSystem>,
    /// HDR personality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdr_personality: Option<String>,
    /// LTE tracking area code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte_tac: Option<u16>,
    /// Call barring status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_barring: Option<CallBarringState>,
    /// UMTS primary scrambling code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub umts_primary_scrambling_code: Option<u16>,
    /// Full operator code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_operator_code: Option<OperatorCode>,
}

impl ServingSystemReport {
    /// Decodes the present fields of a successful response.
    pub fn decode(output: &GetServingSystemOutput) -> Self {
        Self {
            registration: output.serving_system.as_ref().map(|s| Registration {
                registration_state: enum_name::<RegistrationState>(
                    s.registration_state,
                    "registration state",
                ),
                cs: enum_name::<AttachState>(s.cs_attach_state, "CS attach state"),
                ps: enum_name::<AttachState>(s.ps_attach_state, "PS attach state"),
                selected_network: enum_name::<NetworkType>(s.selected_network, "network type"),
                radio_interfaces: s
                    .radio_interfaces
                    .iter()
                    .map(|raw| radio_interface_name(*raw))
                    .collect(),
            }),
            roaming_status: output.roaming_indicator.map(roaming_name),
            data_service_capabilities: output.data_service_capability.as_ref().map(|caps| {
                caps.iter()
                    .map(|raw| enum_name::<DataCapability>(*raw, "data capability"))
                    .collect()
            }),
            current_plmn: output.current_plmn.as_ref().map(|p| Plmn {
                mcc: p.mcc,
                mnc: p.mnc,
                description: p.description.clone(),
            }),
            cdma_system_id: output.cdma_system_id.map(|id| CdmaSystemIds {
                sid: id.sid,
                nid: id.nid,
            }),
            cdma_base_station: output.cdma_base_station_info.map(|bs| BaseStation {
                id: bs.base_station_id,
                latitude: coordinate_to_degrees(bs.latitude),
                longitude: coordinate_to_degrees(bs.longitude),
            }),
            roaming_indicators: output.roaming_indicator_list.as_ref().map(|list| {
                list.iter()
                    .map(|e| NetworkReading::new(e.radio_interface, roaming_name(e.roaming_indicator)))
                    .collect()
            }),
            default_roaming_status: output.default_roaming_indicator.map(roaming_name),
            time_zone_3gpp2: output.time_zone_3gpp2.map(|tz| ServingTimeZone {
                leap_seconds: tz.leap_seconds,
                local_time_offset_minutes: local_time_offset_to_minutes(tz.local_time_offset),
                daylight_saving_time: tz.daylight_saving_time,
            }),
            cdma_p_rev: output.cdma_p_rev,
            time_zone_3gpp_minutes: output.time_zone_3gpp.map(time_zone_to_minutes),
            daylight_saving_time_adjustment_hours: output.daylight_saving_time_adjustment_3gpp,
            lac_3gpp: output.lac_3gpp,
            cid_3gpp: output.cid_3gpp,
            concurrent_service_3gpp2: output.concurrent_service_info_3gpp2,
            prl_indicator_3gpp2: output.prl_indicator_3gpp2,
            dual_transfer_mode_supported: output.dual_transfer_mode_supported,
            detailed_status: output.detailed_service_status.map(|d| DetailedStatus {
                status: enum_name::<ServiceStatus>(d.status, "service status"),
                capability: enum_name::<NetworkServiceDomain>(d.capability, "service domain"),
                hdr_status: enum_name::<ServiceStatus>(d.hdr_status, "HDR service status"),
                hdr_hybrid: d.hdr_hybrid,
                forbidden: d.forbidden,
            }),
            cdma_system_info: output.cdma_system_info.map(|info| CdmaSystem {
                mcc: info.mcc,
                imsi_11_12: info.imsi_11_12,
            }),
            hdr_personality: output
                .hdr_personality
                .map(|raw| enum_name::<HdrPersonality>(raw, "HDR personality")),
            lte_tac: output.lte_tac,
            call_barring: output.call_barring_status.map(|cb| CallBarringState {
                circuit_switched: enum_name::<CallBarringStatus>(cb.cs_status, "call barring status"),
                packet_switched: enum_name::<CallBarringStatus>(cb.ps_status, "call barring status"),
            }),
            umts_primary_scrambling_code: output.umts_primary_scrambling_code,
            full_operator_code: output
                .mnc_pcs_digit_include_status
                .as_ref()
                .map(OperatorCode::from),
        }
    }
}

fn roaming_name(raw: u8) -> String {
    enum_name::<RoamingIndicatorStatus>(raw, "roaming indicator")
}
