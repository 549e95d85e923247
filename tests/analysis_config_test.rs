// ABOUTME: Unit tests for analysis config functionality
// ABOUTME: Validates defaults, environment overrides, strict parsing, and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use stride::config::{AnalysisConfig, ConfigError};

const VARS: [&str; 4] = [
    "STRIDE_MOVING_THRESHOLD_MPS",
    "STRIDE_MIN_REP_DISTANCE_M",
    "STRIDE_BASELINE_WINDOW",
    "STRIDE_HRV_WINDOW_DAYS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_config_validation() {
    let config = AnalysisConfig::default();
    assert!(config.validate().is_ok());
    assert!((config.moving_threshold_mps - 1.0).abs() < f64::EPSILON);
    assert!((config.min_rep_distance_m - 10.0).abs() < f64::EPSILON);
    assert_eq!(config.baseline_window, 7);
    assert_eq!(config.hrv_window_days, 7);
}

#[test]
fn test_invalid_ranges() {
    let zero_threshold = AnalysisConfig {
        moving_threshold_mps: 0.0,
        ..AnalysisConfig::default()
    };
    assert!(matches!(
        zero_threshold.validate(),
        Err(ConfigError::InvalidRange(_))
    ));

    let tiny_rep = AnalysisConfig {
        min_rep_distance_m: 0.5,
        ..AnalysisConfig::default()
    };
    assert!(tiny_rep.validate().is_err());

    let no_hrv_days = AnalysisConfig {
        hrv_window_days: 0,
        ..AnalysisConfig::default()
    };
    assert!(matches!(
        no_hrv_days.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
#[serial]
fn test_empty_environment_yields_defaults() {
    clear_env();
    assert_eq!(AnalysisConfig::from_env(), AnalysisConfig::default());
    assert_eq!(AnalysisConfig::try_from_env().unwrap(), AnalysisConfig::default());
}

#[test]
#[serial]
fn test_environment_variable_override() {
    clear_env();
    env::set_var("STRIDE_MOVING_THRESHOLD_MPS", "1.5");
    env::set_var("STRIDE_BASELINE_WINDOW", " 10 ");

    let config = AnalysisConfig::try_from_env().unwrap();

    assert!((config.moving_threshold_mps - 1.5).abs() < f64::EPSILON);
    assert_eq!(config.baseline_window, 10);
    assert_eq!(config.hrv_window_days, 7);

    clear_env();
}

#[test]
#[serial]
fn test_lenient_loading_falls_back_on_garbage() {
    clear_env();
    env::set_var("STRIDE_MIN_REP_DISTANCE_M", "ten");
    env::set_var("STRIDE_HRV_WINDOW_DAYS", "14");

    let config = AnalysisConfig::from_env();

    assert!((config.min_rep_distance_m - 10.0).abs() < f64::EPSILON);
    assert_eq!(config.hrv_window_days, 14);

    clear_env();
}

#[test]
#[serial]
fn test_strict_loading_rejects_garbage() {
    clear_env();
    env::set_var("STRIDE_MIN_REP_DISTANCE_M", "ten");

    let error = AnalysisConfig::try_from_env().unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().contains("STRIDE_MIN_REP_DISTANCE_M"));

    clear_env();
}

#[test]
#[serial]
fn test_strict_loading_validates_ranges() {
    clear_env();
    env::set_var("STRIDE_BASELINE_WINDOW", "0");

    assert!(matches!(
        AnalysisConfig::try_from_env(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear_env();
}
