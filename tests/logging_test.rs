// ABOUTME: Tests for logging configuration parsing and subscriber installation
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use exercise_tracker::config::load_dotenv;
use exercise_tracker::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use tempfile::TempDir;

fn clear_env() {
    for var in [
        "RUST_LOG",
        "LOG_FORMAT",
        "ENVIRONMENT",
        "LOG_INCLUDE_LOCATION",
        "LOG_INCLUDE_THREAD",
        "LOG_INCLUDE_SPANS",
        "SERVICE_NAME",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_default_logging_config() {
    clear_env();

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "exercise-tracker-server");
    assert!(!config.include_location);
    assert!(!config.include_spans);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);

    env::set_var("LOG_FORMAT", "compact");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);

    env::set_var("LOG_FORMAT", "unknown");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Pretty);

    clear_env();
}

#[test]
#[serial]
fn test_dotenv_values_reach_logging_config() {
    clear_env();
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), "RUST_LOG=trace\nLOG_FORMAT=json\n").unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let loaded = load_dotenv();
    env::set_current_dir(original_dir).unwrap();

    assert!(loaded.unwrap().ends_with(".env"));
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "trace");
    assert_eq!(config.format, LogFormat::Json);

    clear_env();
}

#[test]
#[serial]
fn test_subscriber_installs_once() {
    clear_env();

    let config = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    };
    assert!(config.init().is_ok());
    assert!(config.init().is_err());
}
