//! Unit tests for CLI module
//!
//! Tests action selection, report rendering, and command execution against
//! in-memory replay devices.

#![allow(clippy::panic)]

use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;

use crate::{
    cli::{
        ActionFlags, ActionSelector, Cli, CliError, CliService,
        formatting::{confirmation, format_error, render_json, render_text},
    },
    config::{Config, OutputFormat},
    services::nas::{
        Action, ReplayDevice, ReplayScript, Report,
        decode::{
            NetworkScanReport, ServingSystemReport, SignalInfoReport, SignalStrengthReport,
            SystemSelectionReport, TechnologyPreferenceReport,
        },
        messages::*,
        replay::Reply,
    },
};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("nasctl").chain(args.iter().copied())).unwrap()
}

#[test]
fn selector_with_no_flags_selects_nothing() {
    let selector = ActionSelector::new(ActionFlags::default());
    assert_eq!(selector.select().unwrap(), None);
    assert!(!selector.options_enabled().unwrap());
}

#[test]
fn selector_picks_the_single_flag() {
    let cli = parse(&["--nas-network-scan"]);
    let selector = ActionSelector::new(cli.actions);

    assert_eq!(selector.select().unwrap(), Some(Action::NetworkScan));
    assert!(selector.options_enabled().unwrap());
}

#[test]
fn selector_rejects_multiple_flags() {
    let cli = parse(&["--nas-reset", "--nas-get-signal-info", "--nas-noop"]);
    let selector = ActionSelector::new(cli.actions);

    match selector.select() {
        Err(CliError::TooManyActions { count }) => assert_eq!(count, 3),
        other => panic!("unexpected verdict: {other:?}"),
    }
}

#[test]
fn selector_verdict_is_memoized() {
    let selector = ActionSelector::new(ActionFlags {
        get_serving_system: true,
        ..Default::default()
    });

    for _ in 0..3 {
        assert_eq!(selector.select().unwrap(), Some(Action::GetServingSystem));
    }
}

#[test]
fn every_action_has_a_flag() {
    let flags = [
        ("--nas-get-signal-strength", Action::GetSignalStrength),
        ("--nas-get-signal-info", Action::GetSignalInfo),
        ("--nas-get-serving-system", Action::GetServingSystem),
        ("--nas-get-technology-preference", Action::GetTechnologyPreference),
        (
            "--nas-get-system-selection-preference",
            Action::GetSystemSelectionPreference,
        ),
        ("--nas-network-scan", Action::NetworkScan),
        ("--nas-reset", Action::Reset),
        ("--nas-noop", Action::Noop),
    ];

    for (flag, action) in flags {
        let cli = parse(&[flag]);
        assert_eq!(cli.actions.selected(), vec![action], "{flag}");
    }
}

#[test]
fn command_line_overrides_config() {
    let mut config = Config::default();
    config.output.format = OutputFormat::Json;
    config.device.path = Some("/etc/nasctl/modem.json".into());

    let service = CliService::new(&parse(&["--nas-noop", "--no-color"]), &config);
    assert!(!service.color());

    let service = CliService::new(&parse(&["--nas-noop", "--output", "text"]), &config);
    assert!(service.color());
}

#[test]
fn format_error_colours_only_the_prefix() {
    assert_eq!(
        format_error("operation failed: boom", false),
        "error: operation failed: boom"
    );

    let coloured = format_error("operation failed: boom", true);
    assert!(coloured.starts_with("\x1b[1m\x1b[31merror:\x1b[0m"));
    assert!(coloured.ends_with(" operation failed: boom"));
}

#[test]
fn confirmation_names_the_device() {
    assert_eq!(
        confirmation("/dev/cdc-wdm0", Action::Reset),
        "[/dev/cdc-wdm0] Successfully performed NAS service reset"
    );
    assert_eq!(
        confirmation("/dev/cdc-wdm0", Action::GetServingSystem),
        "[/dev/cdc-wdm0] Successfully got serving system:"
    );
}

#[test]
fn gsm_only_signal_info_renders_only_gsm_section() {
    let report = Report::SignalInfo(SignalInfoReport::decode(&GetSignalInfoOutput {
        gsm_signal_strength: Some(-70),
        ..Default::default()
    }));

    let text = render_text("/dev/cdc-wdm0", Action::GetSignalInfo, &report);

    assert_eq!(
        text,
        "[/dev/cdc-wdm0] Successfully got signal info\nGSM:\n\tRSSI: '-70 dBm'"
    );
}

#[test]
fn signal_strength_text_layout() {
    let report = Report::SignalStrength(SignalStrengthReport::decode(&GetSignalStrengthOutput {
        signal_strength: Some(SignalStrength {
            strength: -68,
            radio_interface: 8,
        }),
        rssi_list: Some(vec![RssiListElement {
            rssi: 70,
            radio_interface: 4,
        }]),
        ecio_list: Some(vec![EcioListElement {
            ecio: 9,
            radio_interface: 5,
        }]),
        sinr: Some(5),
        lte_snr: Some(125),
        ..Default::default()
    }));

    let text = render_text("dev", Action::GetSignalStrength, &report);

    let expected = [
        "[dev] Successfully got signal strength",
        "Current:",
        "\tNetwork 'lte': '-68 dBm'",
        "RSSI:",
        "\tNetwork 'gsm': '-70 dBm'",
        "ECIO:",
        "\tNetwork 'umts': '-4.5 dBm'",
        "SINR:",
        "\tNetwork 'cdma-1xevdo': (5) '1.0 dB'",
        "SNR:",
        "\tNetwork 'lte': '12.5 dB'",
    ]
    .join("\n");
    assert_eq!(text, expected);
}

#[test]
fn serving_system_text_uses_converted_units() {
    let report = Report::ServingSystem(ServingSystemReport::decode(&GetServingSystemOutput {
        serving_system: Some(ServingSystem {
            registration_state: 1,
            cs_attach_state: 1,
            ps_attach_state: 1,
            selected_network: 2,
            radio_interfaces: vec![8],
        }),
        cdma_base_station_info: Some(CdmaBaseStationInfo {
            base_station_id: 3,
            latitude: 14400,
            longitude: -7200,
        }),
        time_zone_3gpp: Some(-4),
        cdma_system_id: Some(CdmaSystemId { sid: 12, nid: 34 }),
        ..Default::default()
    }));

    let text = render_text("dev", Action::GetServingSystem, &report);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "[dev] Successfully got serving system:",
            "\tRegistration state: 'registered'",
            "\tCS: 'attached'",
            "\tPS: 'attached'",
            "\tSelected network: '3gpp'",
            "\tRadio interfaces: '1'",
            "\t\t[0]: 'lte'",
            "\tCDMA System ID:",
            "\t\tSID: '12'",
            "\t\tNID: '34'",
            "\tCDMA Base station info:",
            "\t\tBase station ID: '3'",
            "\t\tLatitude: '1.000000'º",
            "\t\tLongitude: '-0.500000'º",
            "\t3GPP time zone offset: '-60' minutes",
        ]
    );
}

#[test]
fn technology_preference_text_layout() {
    let report = Report::TechnologyPreference(TechnologyPreferenceReport::decode(
        &GetTechnologyPreferenceOutput {
            active: Some(ActiveTechnologyPreference {
                technology_preference: 0b10_0010,
                duration: 0,
            }),
            persistent: Some(0b10_0010),
            ..Default::default()
        },
    ));

    let text = render_text("dev", Action::GetTechnologyPreference, &report);

    assert_eq!(
        text,
        "[dev] Successfully got technology preference\n\
         \tActive: '3gpp, lte', duration: 'permanent'\n\
         \tPersistent: '3gpp, lte'"
    );
}

#[test]
fn system_selection_text_skips_absent_fields() {
    let report = Report::SystemSelectionPreference(SystemSelectionReport::decode(
        &GetSystemSelectionPreferenceOutput {
            emergency_mode: Some(true),
            roaming_preference: Some(0xFF),
            ..Default::default()
        },
    ));

    let text = render_text("dev", Action::GetSystemSelectionPreference, &report);

    assert_eq!(
        text,
        "[dev] Successfully got system selection preference\n\
         \tEmergency mode: 'yes'\n\
         \tRoaming preference: 'any'"
    );
}

#[test]
fn network_scan_text_keeps_original_indices() {
    let report = Report::NetworkScan(NetworkScanReport::decode(&NetworkScanOutput {
        network_information: Some(vec![
            ScanElement::Malformed {
                malformed: "bad".to_string(),
            },
            ScanElement::Parsed(NetworkInformationElement {
                mcc: 214,
                mnc: 7,
                network_status: 0b0000_0110,
                description: "Operator".to_string(),
            }),
        ]),
        ..Default::default()
    }));

    let text = render_text("dev", Action::NetworkScan, &report);

    assert_eq!(
        text,
        "[dev] Successfully scanned networks\n\
         Network [1]:\n\
         \tMCC: '214'\n\
         \tMNC: '7'\n\
         \tStatus: 'available, home'\n\
         \tDescription: 'Operator'"
    );
}

#[test]
fn reset_renders_a_single_line() {
    let text = render_text("dev", Action::Reset, &Report::Reset);
    assert_eq!(text, "[dev] Successfully performed NAS service reset");
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn json_envelope_names_device_and_action() {
    let report = Report::SignalInfo(SignalInfoReport::decode(&GetSignalInfoOutput {
        gsm_signal_strength: Some(-70),
        ..Default::default()
    }));

    let json = render_json("/dev/cdc-wdm0", Action::GetSignalInfo, &report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "device": "/dev/cdc-wdm0",
            "action": "get-signal-info",
            "report": { "gsm": { "rssi_dbm": -70 } }
        })
    );

    let reset = render_json("dev", Action::Reset, &Report::Reset).unwrap();
    let value: serde_json::Value = serde_json::from_str(&reset).unwrap();
    assert_eq!(value, serde_json::json!({ "device": "dev", "action": "reset" }));
}

#[tokio::test]
async fn too_many_actions_never_touch_the_device() {
    let device = ReplayDevice::new(
        ReplayScript {
            reset: Some(Reply::Response(ResetOutput::default())),
            ..Default::default()
        },
        "dev",
    );
    let stats = device.stats();
    let service = CliService::new(
        &parse(&["--nas-reset", "--nas-get-signal-info"]),
        &Config::default(),
    );

    let result = service
        .execute(Arc::new(device), CancellationToken::new())
        .await;

    assert!(matches!(result, Err(CliError::TooManyActions { count: 2 })));
    assert_eq!(stats.allocations(), 0);
    assert_eq!(stats.requests(), 0);
}

#[tokio::test]
async fn execute_renders_the_report_and_releases() {
    let device = ReplayDevice::new(
        ReplayScript {
            reset: Some(Reply::Response(ResetOutput::default())),
            ..Default::default()
        },
        "/dev/cdc-wdm0",
    );
    let stats = device.stats();
    let service = CliService::new(&parse(&["--nas-reset"]), &Config::default());

    let output = service
        .execute(Arc::new(device), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(output, "[/dev/cdc-wdm0] Successfully performed NAS service reset");
    assert_eq!(stats.allocations(), 1);
    assert_eq!(stats.releases(), 1);
}

#[tokio::test]
async fn service_failure_is_reported_with_context() {
    let device = ReplayDevice::new(
        ReplayScript {
            get_serving_system: Some(Reply::Response(GetServingSystemOutput {
                result: ResultStatus::Failure {
                    code: 26,
                    message: "NoEffect".to_string(),
                },
                lte_tac: Some(5),
                ..Default::default()
            })),
            ..Default::default()
        },
        "dev",
    );
    let stats = device.stats();
    let service = CliService::new(&parse(&["--nas-get-serving-system"]), &Config::default());

    let err = service
        .execute(Arc::new(device), CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "couldn't get serving system: NoEffect (code 26)"
    );
    assert_eq!(stats.releases(), 1);
}

#[tokio::test]
async fn no_action_is_an_error_for_execute() {
    let device = ReplayDevice::new(ReplayScript::default(), "dev");
    let stats = device.stats();
    let service = CliService::new(&parse(&[]), &Config::default());

    let result = service
        .execute(Arc::new(device), CancellationToken::new())
        .await;

    assert!(matches!(result, Err(CliError::NoAction)));
    assert_eq!(stats.allocations(), 0);
}

#[tokio::test]
async fn run_without_device_is_an_error() {
    let service = CliService::new(&parse(&["--nas-noop"]), &Config::default());

    let result = service.run(CancellationToken::new()).await;

    assert!(matches!(result, Err(CliError::NoDevice)));
}
