// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment handling and verbosity overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "test-service");

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("SERVICE_NAME");
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "fitness-tracker");
    assert!(!config.include_location);
}

#[test]
fn test_verbose_raises_level_only_when_quieter() {
    assert_eq!(LoggingConfig::default().verbose().level, "debug");

    let trace = LoggingConfig {
        level: "trace".into(),
        ..LoggingConfig::default()
    };
    assert_eq!(trace.verbose().level, "trace");
}
