// ABOUTME: Unit tests for logging configuration and subscriber installation
// ABOUTME: Validates environment parsing, format selection, and double-init handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use hike_analyzer::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

fn clear_env() {
    for var in [
        "RUST_LOG",
        "LOG_FORMAT",
        "LOG_INCLUDE_LOCATION",
        "LOG_INCLUDE_SPANS",
        "SERVICE_NAME",
    ] {
        env::remove_var(var);
    }
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.service_name, "hike-analyzer");
    assert!(!config.include_location);
    assert!(!config.include_spans);
    assert!(!config.service_version.is_empty());
}

#[test]
fn test_log_format_parse() {
    assert_eq!(LogFormat::parse("json"), LogFormat::Json);
    assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::parse("fancy"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("SERVICE_NAME", "trail-checker");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(!config.include_spans);
    assert_eq!(config.service_name, "trail-checker");
}

#[test]
#[serial]
fn test_logging_config_from_empty_env_matches_default() {
    clear_env();
    assert_eq!(LoggingConfig::from_env(), LoggingConfig::default());
}

#[test]
fn test_with_level_overrides() {
    let config = LoggingConfig::default().with_level("trace");
    assert_eq!(config.level, "trace");
}

#[test]
#[serial]
fn test_second_init_fails() {
    let config = LoggingConfig::default().with_level("error");
    let first = config.init();
    let second = config.init();

    assert!(first.is_ok());
    assert!(second.is_err());
}
