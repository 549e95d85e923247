// ABOUTME: Unit tests for logging functionality
// ABOUTME: Validates logging configuration defaults and environment variable handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use stride::intelligence::baselines::parse_sessions;
use stride::intelligence::IntervalParser;
use stride::logging::{LogFormat, LoggingConfig};

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location); // Should be true for production
    assert!(config.include_thread);

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");
}

#[test]
#[serial]
fn test_logging_config_optional_flags() {
    env::remove_var("ENVIRONMENT");
    env::set_var("LOG_INCLUDE_SPANS", "1");

    let config = LoggingConfig::from_env();

    assert!(config.include_spans);
    assert!(!config.include_location);

    env::remove_var("LOG_INCLUDE_SPANS");
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "stride");
    assert!(!config.include_location); // Should be false for development
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
fn test_with_level_overrides_only_level() {
    let config = LoggingConfig::default().with_level("debug");
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_init_with_span_events_installs_once() {
    let config = LoggingConfig {
        format: LogFormat::Json,
        include_spans: true,
        ..LoggingConfig::default()
    }
    .with_level("warn");

    assert!(config.init().is_ok());
    // Instrumented pipeline code runs under the installed subscriber
    let intervals = parse_sessions(&IntervalParser::new(), &[]);
    assert!(intervals.is_empty());
    assert!(config.init().is_err());
}
