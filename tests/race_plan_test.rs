// ABOUTME: Integration tests for multi-event race planning
// ABOUTME: Covers primary selection, deferral behind imminent races, shared build, and volume caveats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stride::intelligence::prescription::RacePlanner;
use stride::models::{PlanRole, RaceEvent, TrainingPhase};

fn event(name: &str, distance_meters: u32, days_until: u32) -> RaceEvent {
    RaceEvent {
        name: name.to_owned(),
        distance_meters,
        days_until,
    }
}

#[test]
fn test_no_events_no_plans() {
    assert!(RacePlanner::plan(&[], 9.5, 30).is_empty());
}

#[test]
fn test_single_event_is_primary() {
    let plans = RacePlanner::plan(&[event("County 100m", 100, 6)], 9.5, 30);
    assert_eq!(plans.len(), 1);
    let plan = &plans[0];
    assert_eq!(plan.role, PlanRole::Primary);
    assert_eq!(plan.current_phase, TrainingPhase::FinalTaper);
    assert_eq!(plan.post_recovery_phase, None);
    assert_eq!(plan.effective_training_days, None);
    assert!(plan.notes.is_empty());
    assert!(plan.predicted_seconds.is_some());
}

#[test]
fn test_secondary_deferred_behind_imminent_primary() {
    let plans = RacePlanner::plan(
        &[event("Club 100m", 100, 10), event("Regional 200m", 200, 40)],
        9.5,
        30,
    );
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].event.name, "Club 100m");
    assert_eq!(plans[0].current_phase, TrainingPhase::RaceSpecific);

    let secondary = &plans[1];
    assert_eq!(secondary.role, PlanRole::Secondary);
    assert_eq!(secondary.current_phase, TrainingPhase::Deferred);
    // 40 - 10 - 4 recovery days
    assert_eq!(secondary.effective_training_days, Some(26));
    assert_eq!(secondary.post_recovery_phase, Some(TrainingPhase::Sharpen));
    assert!(secondary.notes.iter().any(|n| n.contains("Club 100m")));
}

#[test]
fn test_distant_primary_shares_build_phase() {
    let plans = RacePlanner::plan(
        &[event("Indoor 60m", 60, 35), event("Outdoor 200m", 200, 60)],
        9.5,
        30,
    );
    let secondary = &plans[1];
    assert_eq!(plans[0].current_phase, TrainingPhase::Build);
    assert_eq!(secondary.current_phase, TrainingPhase::Build);
    assert_eq!(secondary.post_recovery_phase, None);
    assert!(secondary.notes[0].starts_with("Complementary to Indoor 60m"));
}

#[test]
fn test_mid_range_primary_adds_volume_caveat() {
    let plans = RacePlanner::plan(
        &[event("League 200m", 200, 20), event("League 400m", 400, 25)],
        9.5,
        30,
    );
    let secondary = &plans[1];
    assert_eq!(secondary.current_phase, TrainingPhase::Sharpen);
    assert_eq!(secondary.post_recovery_phase, None);
    // 25 - 20 - 5 recovery days
    assert_eq!(secondary.effective_training_days, Some(0));
    assert!(secondary.notes[0].contains("Reduce volume 20-30%"));
    assert!(secondary.notes[0].contains("Sharpen"));
}

#[test]
fn test_effective_days_never_negative() {
    let plans = RacePlanner::plan(
        &[event("Final 400m", 400, 10), event("Relay 100m", 100, 12)],
        9.5,
        30,
    );
    let secondary = &plans[1];
    assert_eq!(secondary.effective_training_days, Some(0));
    assert_eq!(secondary.post_recovery_phase, Some(TrainingPhase::RacePrep));
}

#[test]
fn test_unsorted_events_pick_nearest_primary() {
    let plans = RacePlanner::plan(
        &[
            event("Late", 400, 50),
            event("Soon", 100, 5),
            event("Middle", 200, 30),
        ],
        9.5,
        30,
    );
    let names: Vec<&str> = plans.iter().map(|p| p.event.name.as_str()).collect();
    assert_eq!(names, vec!["Soon", "Middle", "Late"]);
    assert_eq!(plans[0].role, PlanRole::Primary);
    assert!(plans[1..].iter().all(|p| p.role == PlanRole::Secondary));
}

#[test]
fn test_recovery_days_by_distance() {
    assert_eq!(RacePlanner::recovery_days(100), 4);
    assert_eq!(RacePlanner::recovery_days(200), 5);
    assert_eq!(RacePlanner::recovery_days(400), 7);
    assert_eq!(RacePlanner::recovery_days(800), 9);
    assert_eq!(RacePlanner::recovery_days(60), 9);
}

#[test]
fn test_simple_prediction() {
    assert_eq!(RacePlanner::simple_prediction(100, 10.0, 30), Some(11.14));
    assert_eq!(RacePlanner::simple_prediction(800, 8.0, 30), Some(143.01));
    assert_eq!(RacePlanner::simple_prediction(100, 10.0, 45), Some(11.97));
    assert_eq!(RacePlanner::simple_prediction(100, -1.0, 30), None);
    assert_eq!(RacePlanner::simple_prediction(100, f64::NAN, 30), None);
}

#[test]
fn test_plans_without_peak_have_no_prediction() {
    let plans = RacePlanner::plan(&[event("A", 100, 10), event("B", 200, 20)], 0.0, 30);
    assert!(plans.iter().all(|p| p.predicted_seconds.is_none()));
}
