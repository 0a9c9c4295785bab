//! Unit tests for response decoding
//!
//! Builds sparse responses in memory and checks which report fields come
//! out, and with which converted values.

#![allow(clippy::panic)]

use crate::services::nas::{
    action::Action,
    decode::*,
    error::NasError,
    messages::*,
    units::INVALID_SINR_DB,
};

fn failure(code: u16, message: &str) -> ResultStatus {
    ResultStatus::Failure {
        code,
        message: message.to_string(),
    }
}

#[test]
fn gsm_only_signal_info_yields_only_gsm() {
    let output = GetSignalInfoOutput {
        gsm_signal_strength: Some(-70),
        ..Default::default()
    };

    let report = SignalInfoReport::decode(&output);

    assert_eq!(report.gsm, Some(GsmSignal { rssi_dbm: -70 }));
    assert!(report.cdma.is_none());
    assert!(report.hdr.is_none());
    assert!(report.wcdma.is_none());
    assert!(report.lte.is_none());
    assert!(report.tdma.is_none());
}

#[test]
fn empty_signal_info_yields_empty_report() {
    let report = SignalInfoReport::decode(&GetSignalInfoOutput::default());
    assert_eq!(report, SignalInfoReport::default());
}

#[test]
fn signal_info_converts_units() {
    let output = GetSignalInfoOutput {
        cdma_signal_strength: Some(CdmaSignalStrength { rssi: -80, ecio: 25 }),
        hdr_signal_strength: Some(HdrSignalStrength {
            rssi: -85,
            ecio: 10,
            sinr_level: 2,
            io: -100,
        }),
        lte_signal_strength: Some(LteSignalStrength {
            rssi: -60,
            rsrq: -9,
            rsrp: -95,
            snr: 125,
        }),
        tdma_signal_strength: Some(-77),
        ..Default::default()
    };

    let report = SignalInfoReport::decode(&output);

    assert_eq!(
        report.cdma,
        Some(RssiEcio {
            rssi_dbm: -80,
            ecio_dbm: -12.5
        })
    );
    let hdr = report.hdr.unwrap();
    assert_eq!(hdr.ecio_dbm, -5.0);
    assert_eq!(hdr.sinr_level, 2);
    assert_eq!(hdr.sinr_db, -4.5);
    assert_eq!(hdr.io_dbm, -100);
    let lte = report.lte.unwrap();
    assert_eq!(lte.snr_db, 0.1 * 125.0);
    assert_eq!(lte.rsrp_dbm, -95);
    assert_eq!(report.tdma, Some(TdmaSignal { rscp_dbm: -77 }));
    assert!(report.gsm.is_none());
    assert!(report.wcdma.is_none());
}

#[test]
fn invalid_sinr_level_keeps_sentinel_and_other_fields() {
    let output = GetSignalInfoOutput {
        hdr_signal_strength: Some(HdrSignalStrength {
            rssi: -85,
            ecio: 4,
            sinr_level: 9,
            io: -90,
        }),
        gsm_signal_strength: Some(-71),
        ..Default::default()
    };

    let report = SignalInfoReport::decode(&output);

    let hdr = report.hdr.unwrap();
    assert_eq!(hdr.sinr_db, INVALID_SINR_DB);
    assert_eq!(hdr.ecio_dbm, -2.0);
    assert_eq!(report.gsm, Some(GsmSignal { rssi_dbm: -71 }));
}

#[test]
fn signal_strength_lists_keep_order_and_convert() {
    let output = GetSignalStrengthOutput {
        signal_strength: Some(SignalStrength {
            strength: -68,
            radio_interface: 8,
        }),
        rssi_list: Some(vec![
            RssiListElement {
                rssi: 70,
                radio_interface: 4,
            },
            RssiListElement {
                rssi: 85,
                radio_interface: 5,
            },
        ]),
        ecio_list: Some(vec![EcioListElement {
            ecio: 9,
            radio_interface: 5,
        }]),
        sinr: Some(8),
        lte_snr: Some(-15),
        ..Default::default()
    };

    let report = SignalStrengthReport::decode(&output);

    let current = report.current.unwrap();
    assert_eq!(current.network, "lte");
    assert_eq!(current.value, -68);

    let rssi = report.rssi.unwrap();
    assert_eq!(rssi.len(), 2);
    assert_eq!((rssi[0].network.as_str(), rssi[0].value), ("gsm", -70));
    assert_eq!((rssi[1].network.as_str(), rssi[1].value), ("umts", -85));

    let ecio = report.ecio.unwrap();
    assert_eq!(ecio[0].value, -4.5);

    let sinr = report.sinr.unwrap();
    assert_eq!(sinr.network, "cdma-1xevdo");
    assert_eq!(sinr.db, 9.0);

    let snr = report.lte_snr.unwrap();
    assert_eq!(snr.network, "lte");
    assert_eq!(snr.value, 0.1 * -15.0);

    assert!(report.other.is_none());
    assert!(report.io.is_none());
    assert!(report.rsrq.is_none());
    assert!(report.lte_rsrp.is_none());
}

#[test]
fn empty_list_is_not_absent_list() {
    let output = GetSignalStrengthOutput {
        strength_list: Some(Vec::new()),
        ..Default::default()
    };

    let report = SignalStrengthReport::decode(&output);

    assert_eq!(report.other, Some(Vec::new()));
    assert!(report.rssi.is_none());
    assert!(report.current.is_none());
}

#[test]
fn serving_system_converts_coordinates_and_time_zones() {
    let output = GetServingSystemOutput {
        cdma_base_station_info: Some(CdmaBaseStationInfo {
            base_station_id: 17,
            latitude: 14400,
            longitude: -14400,
        }),
        time_zone_3gpp2: Some(TimeZone3gpp2 {
            leap_seconds: 18,
            local_time_offset: -10,
            daylight_saving_time: true,
        }),
        time_zone_3gpp: Some(8),
        ..Default::default()
    };

    let report = ServingSystemReport::decode(&output);

    let bs = report.cdma_base_station.unwrap();
    assert_eq!(bs.id, 17);
    assert_eq!(bs.latitude, 1.0);
    assert_eq!(bs.longitude, -1.0);

    let tz = report.time_zone_3gpp2.unwrap();
    assert_eq!(tz.local_time_offset_minutes, -300);
    assert!(tz.daylight_saving_time);
    assert_eq!(report.time_zone_3gpp_minutes, Some(120));

    assert!(report.registration.is_none());
    assert!(report.current_plmn.is_none());
    assert!(report.lac_3gpp.is_none());
}

#[test]
fn serving_system_names_enumerations() {
    let output = GetServingSystemOutput {
        serving_system: Some(ServingSystem {
            registration_state: 1,
            cs_attach_state: 1,
            ps_attach_state: 2,
            selected_network: 2,
            radio_interfaces: vec![8, 5],
        }),
        roaming_indicator: Some(1),
        data_service_capability: Some(vec![11, 77]),
        roaming_indicator_list: Some(vec![RoamingIndicatorListElement {
            radio_interface: 8,
            roaming_indicator: 0,
        }]),
        call_barring_status: Some(CallBarring {
            cs_status: -1,
            ps_status: 3,
        }),
        cdma_system_id: Some(CdmaSystemId { sid: 4, nid: 65535 }),
        ..Default::default()
    };

    let report = ServingSystemReport::decode(&output);

    let registration = report.registration.unwrap();
    assert_eq!(registration.registration_state, "registered");
    assert_eq!(registration.cs, "attached");
    assert_eq!(registration.ps, "detached");
    assert_eq!(registration.selected_network, "3gpp");
    assert_eq!(registration.radio_interfaces, vec!["lte", "umts"]);

    assert_eq!(report.roaming_status.as_deref(), Some("off"));
    assert_eq!(
        report.data_service_capabilities,
        Some(vec!["lte".to_string(), "unknown (77)".to_string()])
    );

    let indicators = report.roaming_indicators.unwrap();
    assert_eq!(indicators[0].network, "lte");
    assert_eq!(indicators[0].value, "on");

    let barring = report.call_barring.unwrap();
    assert_eq!(barring.circuit_switched, "unknown");
    assert_eq!(barring.packet_switched, "all-calls");

    assert_eq!(
        report.cdma_system_id,
        Some(CdmaSystemIds { sid: 4, nid: 65535 })
    );
}

#[test]
fn technology_preference_describes_masks() {
    let output = GetTechnologyPreferenceOutput {
        active: Some(ActiveTechnologyPreference {
            technology_preference: 0b10_0110,
            duration: 1,
        }),
        persistent: Some(0),
        ..Default::default()
    };

    let report = TechnologyPreferenceReport::decode(&output);

    let active = report.active.unwrap();
    assert_eq!(active.preference, "3gpp, analog, lte");
    assert_eq!(active.duration, "power-cycle");
    assert_eq!(report.persistent.as_deref(), Some("automatic"));
}

#[test]
fn system_selection_decodes_present_fields_only() {
    let output = GetSystemSelectionPreferenceOutput {
        emergency_mode: Some(false),
        mode_preference: Some(0b1_1000),
        lte_band_preference: Some(1 | (1 << 2) | (1 << 19)),
        network_selection_preference: Some(1),
        manual_network_selection: Some(MncPcsDigitIncludeStatus {
            mcc: 310,
            mnc: 260,
            includes_pcs_digit: true,
        }),
        ..Default::default()
    };

    let report = SystemSelectionReport::decode(&output);

    assert_eq!(report.emergency_mode, Some(false));
    assert_eq!(report.mode_preference.as_deref(), Some("umts, lte"));
    assert_eq!(
        report.lte_band_preference.as_deref(),
        Some("eutran-1, eutran-3, eutran-20")
    );
    assert_eq!(report.network_selection_preference.as_deref(), Some("manual"));
    assert_eq!(
        report.manual_network_selection,
        Some(OperatorCode {
            mcc: 310,
            mnc: 260,
            includes_pcs_digit: true
        })
    );
    assert!(report.band_preference.is_none());
    assert!(report.td_scdma_band_preference.is_none());
    assert!(report.roaming_preference.is_none());
}

#[test]
fn network_scan_skips_malformed_entries() {
    let output = NetworkScanOutput {
        network_information: Some(vec![
            ScanElement::Parsed(NetworkInformationElement {
                mcc: 214,
                mnc: 1,
                network_status: 0b0000_0101,
                description: "Operator A".to_string(),
            }),
            ScanElement::Malformed {
                malformed: "truncated description".to_string(),
            },
            ScanElement::Parsed(NetworkInformationElement {
                mcc: 214,
                mnc: 3,
                network_status: 0,
                description: "Operator B".to_string(),
            }),
        ]),
        radio_access_technology: Some(vec![ScanElement::Parsed(RadioAccessTechnologyElement {
            mcc: 214,
            mnc: 1,
            radio_interface: 8,
        })]),
        ..Default::default()
    };

    let report = NetworkScanReport::decode(&output);

    let networks = report.networks.unwrap();
    assert_eq!(networks.len(), 2);
    assert_eq!(networks[0].index, 0);
    assert_eq!(networks[0].description, "Operator A");
    assert_eq!(networks[1].index, 2);
    assert_eq!(networks[1].status, "none");

    let rats = report.radio_access_technologies.unwrap();
    assert_eq!(rats[0].rat, "lte");
    assert!(report.mnc_pcs_digits.is_none());
}

#[test]
fn failed_result_reports_service_error_without_decoding() {
    let response = Response::SignalInfo(GetSignalInfoOutput {
        result: failure(3, "Internal"),
        gsm_signal_strength: Some(-70),
        ..Default::default()
    });

    let err = Report::decode(Action::GetSignalInfo, &response).unwrap_err();

    match &err {
        NasError::Service { context, source } => {
            assert_eq!(*context, "couldn't get signal info");
            assert_eq!(source.code, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "couldn't get signal info: Internal (code 3)"
    );
}

#[test]
fn reset_and_noop_decode_to_confirmations() {
    let reset = Response::Reset(ResetOutput::default());
    assert_eq!(Report::decode(Action::Reset, &reset).unwrap(), Report::Reset);
    assert_eq!(
        Report::decode(Action::Noop, &Response::Noop).unwrap(),
        Report::Noop
    );

    let rejected = Response::Reset(ResetOutput {
        result: failure(1, "Malformed message"),
    });
    assert!(Report::decode(Action::Reset, &rejected).is_err());
}

#[test]
fn report_json_skips_absent_fields() {
    let output = GetSignalInfoOutput {
        gsm_signal_strength: Some(-70),
        ..Default::default()
    };
    let report = Report::SignalInfo(SignalInfoReport::decode(&output));

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json, serde_json::json!({ "gsm": { "rssi_dbm": -70 } }));
}
