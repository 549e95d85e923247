// ABOUTME: Integration tests for strength zone and sprint workout rule tables
// ABOUTME: Validates TSB zone edges, load estimates, re-activation priority, and volume ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stride::intelligence::prescription::{
    estimate_weight_kg, SprintContext, SprintWorkoutSelector, StrengthPrescriber,
};
use stride::models::{Exercise, Intensity, StatusBand, StrengthZone, WorkoutKind};

fn exercise(multiplier: Option<f64>) -> Exercise {
    Exercise {
        name: "Back Squat".to_owned(),
        prescription: "4 x 3".to_owned(),
        body_weight_multiplier: multiplier,
        estimated_load_kg: None,
    }
}

#[test]
fn test_strength_zone_edges() {
    assert_eq!(
        StrengthPrescriber::select_zone(10.0),
        (StrengthZone::Fresh, Intensity::High)
    );
    assert_eq!(
        StrengthPrescriber::select_zone(0.0),
        (StrengthZone::Fresh, Intensity::High)
    );
    assert_eq!(
        StrengthPrescriber::select_zone(-15.0),
        (StrengthZone::Tired, Intensity::Moderate)
    );
    assert_eq!(
        StrengthPrescriber::select_zone(-20.0),
        (StrengthZone::Tired, Intensity::Moderate)
    );
    assert_eq!(
        StrengthPrescriber::select_zone(-21.0),
        (StrengthZone::Fatigued, Intensity::None)
    );
    assert_eq!(
        StrengthPrescriber::select_zone(-25.0),
        (StrengthZone::Fatigued, Intensity::None)
    );
}

#[test]
fn test_estimate_weight() {
    assert_eq!(estimate_weight_kg(&exercise(Some(1.7)), 80.0), Some(136));
    assert_eq!(estimate_weight_kg(&exercise(Some(0.5)), 75.0), Some(38));
    assert_eq!(estimate_weight_kg(&exercise(None), 80.0), None);
    assert_eq!(estimate_weight_kg(&exercise(Some(1.5)), 0.0), None);
}

#[test]
fn test_fresh_prescription_with_loads() {
    let prescription = StrengthPrescriber::prescribe(5.0, Some(80.0));
    assert_eq!(prescription.zone, StrengthZone::Fresh);
    assert_eq!(prescription.intensity, Intensity::High);
    assert!(!prescription.exercises.is_empty());

    let squat = prescription
        .exercises
        .iter()
        .find(|e| e.name == "Back Squat")
        .unwrap();
    assert_eq!(squat.estimated_load_kg, Some(120));

    for exercise in &prescription.exercises {
        assert_eq!(
            exercise.estimated_load_kg.is_some(),
            exercise.body_weight_multiplier.is_some()
        );
    }
}

#[test]
fn test_prescription_without_body_weight() {
    let prescription = StrengthPrescriber::prescribe(5.0, None);
    assert!(prescription.exercises.iter().all(|e| e.estimated_load_kg.is_none()));
}

#[test]
fn test_fatigued_prescription_has_no_loaded_lifting() {
    let prescription = StrengthPrescriber::prescribe(-30.0, Some(80.0));
    assert_eq!(prescription.intensity, Intensity::None);
    assert!(prescription
        .exercises
        .iter()
        .all(|e| e.body_weight_multiplier.is_none() && e.estimated_load_kg.is_none()));
}

#[test]
fn test_band_branches_without_context() {
    let green = SprintWorkoutSelector::select(StatusBand::Green, 1.0, None);
    let amber = SprintWorkoutSelector::select(StatusBand::Amber, 0.95, None);
    let red = SprintWorkoutSelector::select(StatusBand::Red, 0.90, None);

    assert_eq!(green.kind, WorkoutKind::MaxVelocity);
    assert_eq!(amber.kind, WorkoutKind::Technical);
    assert_eq!(red.kind, WorkoutKind::Recovery);

    assert!(green.sprint_volume_meters > amber.sprint_volume_meters);
    assert!(amber.sprint_volume_meters > red.sprint_volume_meters);
    assert_eq!(red.sprint_volume_meters, 0);
    assert!(red.total_volume.starts_with("0 m"));
}

#[test]
fn test_stale_signal_selects_reactivation() {
    let context = SprintContext {
        training_stress_balance: 5.0,
    };
    let workout = SprintWorkoutSelector::select(StatusBand::Red, 0.90, Some(context));

    assert_eq!(workout.kind, WorkoutKind::Reactivation);
    assert_eq!(workout.status, StatusBand::Red);
    assert!(workout.sprint_volume_meters > 0);
    assert!(workout.rationale.contains("90.0%"));
    assert!(workout.rationale.contains("+5.0"));
}

#[test]
fn test_loaded_red_athlete_recovers() {
    let context = SprintContext {
        training_stress_balance: -15.0,
    };
    let workout = SprintWorkoutSelector::select(StatusBand::Red, 0.90, Some(context));
    assert_eq!(workout.kind, WorkoutKind::Recovery);
    assert!(workout.rationale.contains("90.0%"));
}

#[test]
fn test_green_ignores_freshness_context() {
    let context = SprintContext {
        training_stress_balance: 15.0,
    };
    let workout = SprintWorkoutSelector::select(StatusBand::Green, 1.01, Some(context));
    assert_eq!(workout.kind, WorkoutKind::MaxVelocity);
}

#[test]
fn test_workout_is_fully_populated() {
    for band in [StatusBand::Green, StatusBand::Amber, StatusBand::Red] {
        let workout = SprintWorkoutSelector::select(band, 0.96, None);
        assert!(!workout.name.is_empty());
        assert!(!workout.warmup.is_empty());
        assert!(!workout.main_set.is_empty());
        assert!(!workout.cooldown.is_empty());
        assert!(workout.main_set.iter().all(|b| b.repetitions > 0));
    }
}
