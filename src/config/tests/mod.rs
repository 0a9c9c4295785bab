//! Unit tests for config module
//!
//! Tests configuration types, defaults, serialization, and loading from
//! temporary files.

#![allow(clippy::panic)]

use std::fs;

use crate::config::{Config, ConfigError, LogLevel, OutputFormat};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Warn);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(config.output.color);
    assert!(config.device.path.is_none());
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[output]"));
    assert!(toml_str.contains("log_level = \"warn\""));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [output]
        format = "json"
        color = false

        [device]
        path = "/var/lib/nasctl/modem.json"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.output.color);
    assert_eq!(
        config.device.path.as_deref(),
        Some(std::path::Path::new("/var/lib/nasctl/modem.json"))
    );
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config::default();

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized: Config = toml::from_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_empty_toml() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_partial_section_keeps_other_defaults() {
    let config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();

    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.color);
    assert_eq!(config.general.log_level, LogLevel::Warn);
}

#[test]
fn config_invalid_log_level() {
    let result: Result<Config, toml::de::Error> =
        toml::from_str("[general]\nlog_level = \"loud\"\n");
    assert!(result.is_err());
}

#[test]
fn log_level_verbosity_only_increases() {
    assert_eq!(LogLevel::Debug.max_verbosity(LogLevel::Warn), LogLevel::Debug);
    assert_eq!(LogLevel::Debug.max_verbosity(LogLevel::Trace), LogLevel::Trace);
    assert_eq!(LogLevel::Error.to_string(), "error");
}

#[test]
fn load_optional_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = Config::load_optional(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_file_missing_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = Config::load(Some(&dir.path().join("absent.toml")));

    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn load_file_reads_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[general]\nlog_level = \"trace\"\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Trace);
}

#[test]
fn load_file_reports_parse_location() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[general\nlog_level = ").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();

    match &err {
        ConfigError::TomlParse { location, .. } => assert_eq!(location, &path),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("failed to parse TOML at"));
}
