use crate::services::nas::{
    Action, Report,
    decode::{
        NetworkReading, NetworkScanReport, ServingSystemReport, SignalInfoReport,
        SignalStrengthReport, SystemSelectionReport, TechnologyPreferenceReport,
    },
};

/// First line printed on success, naming the device.
pub fn confirmation(device: &str, action: Action) -> String {
    let done = match action {
        Action::GetSignalStrength => "got signal strength",
        Action::GetSignalInfo => "got signal info",
        Action::GetServingSystem => "got serving system:",
        Action::GetTechnologyPreference => "got technology preference",
        Action::GetSystemSelectionPreference => "got system selection preference",
        Action::NetworkScan => "scanned networks",
        Action::Reset => "performed NAS service reset",
        Action::Noop => "performed no-op",
    };

    format!("[{device}] Successfully {done}")
}

/// Renders a report as labelled sections with tab-indented, quoted values.
///
/// Only fields present in the report produce lines.
pub fn render_text(device: &str, action: Action, report: &Report) -> String {
    let mut out = vec![confirmation(device, action)];

    match report {
        Report::SignalStrength(r) => signal_strength(&mut out, r),
        Report::SignalInfo(r) => signal_info(&mut out, r),
        Report::ServingSystem(r) => serving_system(&mut out, r),
        Report::TechnologyPreference(r) => technology_preference(&mut out, r),
        Report::SystemSelectionPreference(r) => system_selection(&mut out, r),
        Report::NetworkScan(r) => network_scan(&mut out, r),
        Report::Reset | Report::Noop => {}
    }

    out.join("\n")
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn network_line<T: std::fmt::Display>(reading: &NetworkReading<T>, unit: &str) -> String {
    format!("\tNetwork '{}': '{} {unit}'", reading.network, reading.value)
}

fn signal_strength(out: &mut Vec<String>, r: &SignalStrengthReport) {
    if let Some(current) = &r.current {
        out.push("Current:".into());
        out.push(network_line(current, "dBm"));
    }

    if let Some(other) = &r.other {
        out.push("Other:".into());
        out.extend(other.iter().map(|e| network_line(e, "dBm")));
    }

    if let Some(rssi) = &r.rssi {
        out.push("RSSI:".into());
        out.extend(rssi.iter().map(|e| network_line(e, "dBm")));
    }

    if let Some(ecio) = &r.ecio {
        out.push("ECIO:".into());
        out.extend(
            ecio.iter()
                .map(|e| format!("\tNetwork '{}': '{:.1} dBm'", e.network, e.value)),
        );
    }

    if let Some(io) = &r.io {
        out.push("IO:".into());
        out.push(network_line(io, "dBm"));
    }

    if let Some(sinr) = &r.sinr {
        out.push("SINR:".into());
        out.push(format!(
            "\tNetwork '{}': ({}) '{:.1} dB'",
            sinr.network, sinr.level, sinr.db
        ));
    }

    if let Some(rsrq) = &r.rsrq {
        out.push("RSRQ:".into());
        out.push(network_line(rsrq, "dB"));
    }

    if let Some(snr) = &r.lte_snr {
        out.push("SNR:".into());
        out.push(format!("\tNetwork '{}': '{:.1} dB'", snr.network, snr.value));
    }

    if let Some(rsrp) = &r.lte_rsrp {
        out.push("RSRP:".into());
        out.push(network_line(rsrp, "dBm"));
    }
}

fn signal_info(out: &mut Vec<String>, r: &SignalInfoReport) {
    if let Some(cdma) = &r.cdma {
        out.push("CDMA:".into());
        out.push(format!("\tRSSI: '{} dBm'", cdma.rssi_dbm));
        out.push(format!("\tECIO: '{:.1} dBm'", cdma.ecio_dbm));
    }

    if let Some(hdr) = &r.hdr {
        out.push("HDR:".into());
        out.push(format!("\tRSSI: '{} dBm'", hdr.rssi_dbm));
        out.push(format!("\tECIO: '{:.1} dBm'", hdr.ecio_dbm));
        out.push(format!("\tSINR ({}): '{:.1} dB'", hdr.sinr_level, hdr.sinr_db));
        out.push(format!("\tIO: '{} dBm'", hdr.io_dbm));
    }

    if let Some(gsm) = &r.gsm {
        out.push("GSM:".into());
        out.push(format!("\tRSSI: '{} dBm'", gsm.rssi_dbm));
    }

    if let Some(wcdma) = &r.wcdma {
        out.push("WCDMA:".into());
        out.push(format!("\tRSSI: '{} dBm'", wcdma.rssi_dbm));
        out.push(format!("\tECIO: '{:.1} dBm'", wcdma.ecio_dbm));
    }

    if let Some(lte) = &r.lte {
        out.push("LTE:".into());
        out.push(format!("\tRSSI: '{} dBm'", lte.rssi_dbm));
        out.push(format!("\tRSRQ: '{} dB'", lte.rsrq_db));
        out.push(format!("\tRSRP: '{} dBm'", lte.rsrp_dbm));
        out.push(format!("\tSNR: '{:.1} dB'", lte.snr_db));
    }

    if let Some(tdma) = &r.tdma {
        out.push("TDMA:".into());
        out.push(format!("\tRSCP: '{} dBm'", tdma.rscp_dbm));
    }
}

fn serving_system(out: &mut Vec<String>, r: &ServingSystemReport) {
    if let Some(reg) = &r.registration {
        out.push(format!("\tRegistration state: '{}'", reg.registration_state));
        out.push(format!("\tCS: '{}'", reg.cs));
        out.push(format!("\tPS: '{}'", reg.ps));
        out.push(format!("\tSelected network: '{}'", reg.selected_network));
        out.push(format!("\tRadio interfaces: '{}'", reg.radio_interfaces.len()));
        out.extend(
            reg.radio_interfaces
                .iter()
                .enumerate()
                .map(|(i, iface)| format!("\t\t[{i}]: '{iface}'")),
        );
    }

    if let Some(roaming) = &r.roaming_status {
        out.push(format!("\tRoaming status: '{roaming}'"));
    }

    if let Some(caps) = &r.data_service_capabilities {
        out.push(format!("\tData service capabilities: '{}'", caps.len()));
        out.extend(
            caps.iter()
                .enumerate()
                .map(|(i, cap)| format!("\t\t[{i}]: '{cap}'")),
        );
    }

    if let Some(plmn) = &r.current_plmn {
        out.push("\tCurrent PLMN:".into());
        out.push(format!("\t\tMCC: '{}'", plmn.mcc));
        out.push(format!("\t\tMNC: '{}'", plmn.mnc));
        out.push(format!("\t\tDescription: '{}'", plmn.description));
    }

    if let Some(ids) = &r.cdma_system_id {
        out.push("\tCDMA System ID:".into());
        out.push(format!("\t\tSID: '{}'", ids.sid));
        out.push(format!("\t\tNID: '{}'", ids.nid));
    }

    if let Some(bs) = &r.cdma_base_station {
        out.push("\tCDMA Base station info:".into());
        out.push(format!("\t\tBase station ID: '{}'", bs.id));
        out.push(format!("\t\tLatitude: '{:.6}'º", bs.latitude));
        out.push(format!("\t\tLongitude: '{:.6}'º", bs.longitude));
    }

    if let Some(indicators) = &r.roaming_indicators {
        out.push(format!("\tRoaming indicators: '{}'", indicators.len()));
        out.extend(
            indicators
                .iter()
                .enumerate()
                .map(|(i, e)| format!("\t\t[{i}]: '{}' ({})", e.value, e.network)),
        );
    }

    if let Some(roaming) = &r.default_roaming_status {
        out.push(format!("\tDefault roaming status: '{roaming}'"));
    }

    if let Some(tz) = &r.time_zone_3gpp2 {
        out.push("\t3GPP2 time zone:".into());
        out.push(format!("\t\tLeap seconds: '{}' seconds", tz.leap_seconds));
        out.push(format!(
            "\t\tLocal time offset: '{}' minutes",
            tz.local_time_offset_minutes
        ));
        out.push(format!(
            "\t\tDaylight saving time: '{}'",
            yes_no(tz.daylight_saving_time)
        ));
    }

    if let Some(p_rev) = r.cdma_p_rev {
        out.push(format!("\tCDMA P_Rev: '{p_rev}'"));
    }

    if let Some(minutes) = r.time_zone_3gpp_minutes {
        out.push(format!("\t3GPP time zone offset: '{minutes}' minutes"));
    }

    if let Some(hours) = r.daylight_saving_time_adjustment_hours {
        out.push(format!(
            "\t3GPP daylight saving time adjustment: '{hours}' hours"
        ));
    }

    if let Some(lac) = r.lac_3gpp {
        out.push(format!("\t3GPP location area code: '{lac}'"));
    }

    if let Some(cid) = r.cid_3gpp {
        out.push(format!("\t3GPP cell ID: '{cid}'"));
    }

    if let Some(concurrent) = r.concurrent_service_3gpp2 {
        let text = if concurrent { "available" } else { "not available" };
        out.push(format!("\t3GPP2 concurrent service info: '{text}'"));
    }

    if let Some(prl) = r.prl_indicator_3gpp2 {
        let text = if prl { "system in PRL" } else { "system not in PRL" };
        out.push(format!("\t3GPP2 PRL indicator: '{text}'"));
    }

    if let Some(dtm) = r.dual_transfer_mode_supported {
        let text = if dtm { "supported" } else { "not supported" };
        out.push(format!("\tDual transfer mode: '{text}'"));
    }

    if let Some(detail) = &r.detailed_status {
        out.push("\tDetailed status:".into());
        out.push(format!("\t\tStatus: '{}'", detail.status));
        out.push(format!("\t\tCapability: '{}'", detail.capability));
        out.push(format!("\t\tHDR Status: '{}'", detail.hdr_status));
        out.push(format!("\t\tHDR Hybrid: '{}'", yes_no(detail.hdr_hybrid)));
        out.push(format!("\t\tForbidden: '{}'", yes_no(detail.forbidden)));
    }

    if let Some(info) = &r.cdma_system_info {
        out.push("\tCDMA system info:".into());
        out.push(format!("\t\tMCC: '{}'", info.mcc));
        out.push(format!("\t\tIMSI_11_12: '{}'", info.imsi_11_12));
    }

    if let Some(personality) = &r.hdr_personality {
        out.push(format!("\tHDR personality: '{personality}'"));
    }

    if let Some(tac) = r.lte_tac {
        out.push(format!("\tLTE tracking area code: '{tac}'"));
    }

    if let Some(barring) = &r.call_barring {
        out.push("\tCall barring status:".into());
        out.push(format!("\t\tCircuit switched: '{}'", barring.circuit_switched));
        out.push(format!("\t\tPacket switched: '{}'", barring.packet_switched));
    }

    if let Some(code) = r.umts_primary_scrambling_code {
        out.push(format!("\tUMTS primary scrambling code: '{code}'"));
    }

    if let Some(op) = &r.full_operator_code {
        out.push("\tFull operator code info:".into());
        out.push(format!("\t\tMCC: '{}'", op.mcc));
        out.push(format!("\t\tMNC: '{}'", op.mnc));
        out.push(format!(
            "\t\tMNC with PCS digit: '{}'",
            yes_no(op.includes_pcs_digit)
        ));
    }
}

fn technology_preference(out: &mut Vec<String>, r: &TechnologyPreferenceReport) {
    if let Some(active) = &r.active {
        out.push(format!(
            "\tActive: '{}', duration: '{}'",
            active.preference, active.duration
        ));
    }

    if let Some(persistent) = &r.persistent {
        out.push(format!("\tPersistent: '{persistent}'"));
    }
}

fn system_selection(out: &mut Vec<String>, r: &SystemSelectionReport) {
    if let Some(emergency) = r.emergency_mode {
        out.push(format!("\tEmergency mode: '{}'", yes_no(emergency)));
    }

    let labelled = [
        ("Mode preference", &r.mode_preference),
        ("Band preference", &r.band_preference),
        ("LTE band preference", &r.lte_band_preference),
        ("TD-SCDMA band preference", &r.td_scdma_band_preference),
        ("CDMA PRL preference", &r.cdma_prl_preference),
        ("Roaming preference", &r.roaming_preference),
        ("Network selection preference", &r.network_selection_preference),
        ("Service domain preference", &r.service_domain_preference),
        (
            "GSM/WCDMA acquisition order preference",
            &r.gsm_wcdma_acquisition_order,
        ),
    ];
    for (label, value) in labelled {
        if let Some(value) = value {
            out.push(format!("\t{label}: '{value}'"));
        }
    }

    if let Some(manual) = &r.manual_network_selection {
        out.push("\tManual network selection:".into());
        out.push(format!("\t\tMCC: '{}'", manual.mcc));
        out.push(format!("\t\tMNC: '{}'", manual.mnc));
        out.push(format!(
            "\t\tMNC with PCS digit: '{}'",
            yes_no(manual.includes_pcs_digit)
        ));
    }
}

fn network_scan(out: &mut Vec<String>, r: &NetworkScanReport) {
    for network in r.networks.iter().flatten() {
        out.push(format!("Network [{}]:", network.index));
        out.push(format!("\tMCC: '{}'", network.mcc));
        out.push(format!("\tMNC: '{}'", network.mnc));
        out.push(format!("\tStatus: '{}'", network.status));
        out.push(format!("\tDescription: '{}'", network.description));
    }

    for tech in r.radio_access_technologies.iter().flatten() {
        out.push(format!("Network [{}]:", tech.index));
        out.push(format!("\tMCC: '{}'", tech.mcc));
        out.push(format!("\tMNC: '{}'", tech.mnc));
        out.push(format!("\tRAT: '{}'", tech.rat));
    }

    for operator in r.mnc_pcs_digits.iter().flatten() {
        out.push(format!("Network [{}]:", operator.index));
        out.push(format!("\tMCC: '{}'", operator.code.mcc));
        out.push(format!("\tMNC: '{}'", operator.code.mnc));
        out.push(format!(
            "\tMNC with PCS digit: '{}'",
            yes_no(operator.code.includes_pcs_digit)
        ));
    }
}
