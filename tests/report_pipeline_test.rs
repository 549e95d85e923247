// ABOUTME: End-to-end tests for the athlete report pipeline
// ABOUTME: Validates composition of parsing, readiness, predictions, prescriptions, and the write-back series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use stride::config::AnalysisConfig;
use stride::errors::ErrorCode;
use stride::intelligence::report::fatigue_index_series;
use stride::models::{
    ActivityRecord, ConfidenceBand, PlanRole, StatusBand, StrengthZone, TrainingLoad,
    TrainingPhase, WorkoutKind,
};
use stride::{build_report, AthleteSnapshot};

#[test]
fn test_report_for_fresh_athlete() {
    common::init_test_logging();
    let snapshot = common::sample_snapshot();

    let report = build_report(&snapshot, &AnalysisConfig::default()).unwrap();

    // 9.4 today against a 9.5 baseline
    assert!((report.readiness.fatigue_index - 0.989).abs() < 1e-9);
    assert_eq!(report.readiness.status_band, StatusBand::Green);
    assert!(!report.readiness.is_stale_signal);
    assert!(report.readiness.recovery_score <= 100);

    assert_eq!(report.intervals.len(), 5);
    assert_eq!(report.profile.acceleration_interval_count, 33);
    assert_eq!(report.profile.endurance_interval_count, 11);

    assert_eq!(report.predictions.len(), 3);
    assert!(report
        .predictions
        .iter()
        .all(|p| p.confidence == ConfidenceBand::High && !p.is_no_data()));

    assert_eq!(report.strength.zone, StrengthZone::Fresh);
    assert_eq!(report.sprint_workout.kind, WorkoutKind::MaxVelocity);
}

#[test]
fn test_race_plans_sorted_and_deferred() {
    let report = build_report(&common::sample_snapshot(), &AnalysisConfig::default()).unwrap();

    assert_eq!(report.race_plans.len(), 2);
    let primary = &report.race_plans[0];
    assert_eq!(primary.event.name, "Club 100m");
    assert_eq!(primary.role, PlanRole::Primary);

    let secondary = &report.race_plans[1];
    assert_eq!(secondary.current_phase, TrainingPhase::Deferred);
    assert_eq!(secondary.effective_training_days, Some(26));
}

#[test]
fn test_fatigue_series_covers_every_sample() {
    let snapshot = common::sample_snapshot();
    let report = build_report(&snapshot, &AnalysisConfig::default()).unwrap();

    let series = &report.fatigue_series;
    assert_eq!(series.values.len(), snapshot.activity.sample_count());
    assert!(series
        .values
        .iter()
        .all(|v| (v - report.readiness.fatigue_index).abs() < f64::EPSILON));
    assert_eq!(series.name, "Neuromuscular Fatigue Index");
    assert_eq!(series.short_name, "NFI");
    assert_eq!(series.units, "ratio");
    assert_eq!(series.color, "#e4572e");
}

#[test]
fn test_fatigue_series_serializes_camel_case() {
    let json = serde_json::to_value(fatigue_index_series(0.95, 2)).unwrap();
    assert_eq!(json["shortName"], "NFI");
    assert_eq!(json["values"].as_array().unwrap().len(), 2);
}

#[test]
fn test_stale_athlete_gets_reactivation() {
    let mut snapshot = common::sample_snapshot();
    snapshot.activity = common::activity("today", common::day(14), common::training_session(8.5));

    let report = build_report(&snapshot, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.readiness.status_band, StatusBand::Red);
    assert!(report.readiness.is_stale_signal);
    assert_eq!(report.sprint_workout.kind, WorkoutKind::Reactivation);
}

#[test]
fn test_first_session_without_history() {
    let mut snapshot = common::sample_snapshot();
    snapshot.history.clear();
    snapshot.wellness.clear();
    snapshot.events.clear();

    let report = build_report(&snapshot, &AnalysisConfig::default()).unwrap();

    assert!((report.readiness.fatigue_index - 1.0).abs() < f64::EPSILON);
    assert!(report.race_plans.is_empty());
    assert!(report
        .predictions
        .iter()
        .all(|p| p.confidence == ConfidenceBand::Low));
}

#[test]
fn test_missing_stream_reports_no_data() {
    let mut snapshot = common::sample_snapshot();
    snapshot.history.clear();
    snapshot.activity = ActivityRecord {
        id: "empty".to_owned(),
        ..ActivityRecord::default()
    };

    let report = build_report(&snapshot, &AnalysisConfig::default()).unwrap();

    assert!(report.intervals.is_empty());
    assert!(report.fatigue_series.values.is_empty());
    assert!(report.predictions.iter().all(|p| p.display == "--"));
    assert!(report.race_plans.iter().all(|p| p.predicted_seconds.is_none()));
}

#[test]
fn test_invalid_snapshots_are_rejected() {
    let config = AnalysisConfig::default();

    let mut negative_sample = common::sample_snapshot();
    negative_sample.activity.velocity_stream = Some(vec![0.0, -2.0, 5.0]);
    let error = build_report(&negative_sample, &config).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let mut no_age = common::sample_snapshot();
    no_age.athlete.age = 0;
    let error = build_report(&no_age, &config).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);

    let mut zero_distance = common::sample_snapshot();
    zero_distance.events[0].distance_meters = 0;
    let error = build_report(&zero_distance, &config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);

    let mut bad_load = common::sample_snapshot();
    bad_load.training_load = TrainingLoad::new(f64::NAN, 40.0);
    let error = build_report(&bad_load, &config).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = AnalysisConfig {
        baseline_window: 0,
        ..AnalysisConfig::default()
    };
    let error = build_report(&common::sample_snapshot(), &config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_snapshot_json_defaults() {
    let json = r#"{
        "activity": { "id": "x1", "velocity_stream": [0.0, 6.0, 6.0, 0.0] },
        "athlete": { "age": 28 }
    }"#;
    let snapshot: AthleteSnapshot = serde_json::from_str(json).unwrap();
    assert!(snapshot.history.is_empty());
    assert!(snapshot.events.is_empty());

    let report = build_report(&snapshot, &AnalysisConfig::default()).unwrap();
    assert_eq!(report.intervals.len(), 1);
    assert_eq!(report.fatigue_series.values.len(), 4);
}
