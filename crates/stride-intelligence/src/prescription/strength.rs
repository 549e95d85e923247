// ABOUTME: Strength zone rule table keyed on training stress balance
// ABOUTME: Fixed exercise lists per zone with body-weight-relative load estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stride_core::constants::prescription::{FRESH_TSB_MIN, TIRED_TSB_MIN};
use stride_core::models::{Exercise, Intensity, StrengthPrescription, StrengthZone};

struct ExerciseTemplate {
    name: &'static str,
    prescription: &'static str,
    body_weight_multiplier: Option<f64>,
}

const FRESH_EXERCISES: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Back Squat",
        prescription: "4 x 3",
        body_weight_multiplier: Some(1.5),
    },
    ExerciseTemplate {
        name: "Power Clean",
        prescription: "4 x 2",
        body_weight_multiplier: Some(1.0),
    },
    ExerciseTemplate {
        name: "Hip Thrust",
        prescription: "3 x 5",
        body_weight_multiplier: Some(1.7),
    },
    ExerciseTemplate {
        name: "Romanian Deadlift",
        prescription: "3 x 5",
        body_weight_multiplier: Some(1.2),
    },
    ExerciseTemplate {
        name: "Depth Jumps",
        prescription: "3 x 4",
        body_weight_multiplier: None,
    },
];

const TIRED_EXERCISES: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Trap Bar Deadlift",
        prescription: "3 x 5 @ 70%",
        body_weight_multiplier: Some(1.2),
    },
    ExerciseTemplate {
        name: "Split Squat",
        prescription: "3 x 6 each leg",
        body_weight_multiplier: Some(0.5),
    },
    ExerciseTemplate {
        name: "Nordic Hamstring Curl",
        prescription: "3 x 5",
        body_weight_multiplier: None,
    },
    ExerciseTemplate {
        name: "Pogo Hops",
        prescription: "3 x 15",
        body_weight_multiplier: None,
    },
];

const FATIGUED_EXERCISES: &[ExerciseTemplate] = &[
    ExerciseTemplate {
        name: "Hip Mobility Flow",
        prescription: "10 min",
        body_weight_multiplier: None,
    },
    ExerciseTemplate {
        name: "Banded Glute Activation",
        prescription: "2 x 15",
        body_weight_multiplier: None,
    },
    ExerciseTemplate {
        name: "Foam Rolling",
        prescription: "10 min",
        body_weight_multiplier: None,
    },
];

/// Strength prescription rule table
pub struct StrengthPrescriber;

impl StrengthPrescriber {
    /// Zone and intensity for a training stress balance
    ///
    /// `tsb >= 0` is fresh/high, `-20 <= tsb < 0` is tired/moderate, anything lower
    /// is fatigued/none.
    #[must_use]
    pub fn select_zone(training_stress_balance: f64) -> (StrengthZone, Intensity) {
        if training_stress_balance >= FRESH_TSB_MIN {
            (StrengthZone::Fresh, Intensity::High)
        } else if training_stress_balance >= TIRED_TSB_MIN {
            (StrengthZone::Tired, Intensity::Moderate)
        } else {
            (StrengthZone::Fatigued, Intensity::None)
        }
    }

    /// Full session for the zone, with load estimates when body weight is known
    #[must_use]
    pub fn prescribe(
        training_stress_balance: f64,
        body_weight_kg: Option<f64>,
    ) -> StrengthPrescription {
        let (zone, intensity) = Self::select_zone(training_stress_balance);
        let (focus, templates) = match zone {
            StrengthZone::Fresh => (
                "Maximal strength and power: heavy triple extension with low reps",
                FRESH_EXERCISES,
            ),
            StrengthZone::Tired => (
                "Strength maintenance: sub-maximal loads, crisp reps, no grinding",
                TIRED_EXERCISES,
            ),
            StrengthZone::Fatigued => (
                "No loaded lifting: mobility and tissue work only",
                FATIGUED_EXERCISES,
            ),
        };

        let exercises = templates
            .iter()
            .map(|template| {
                let mut exercise = Exercise {
                    name: template.name.to_owned(),
                    prescription: template.prescription.to_owned(),
                    body_weight_multiplier: template.body_weight_multiplier,
                    estimated_load_kg: None,
                };
                exercise.estimated_load_kg =
                    body_weight_kg.and_then(|bw| estimate_weight_kg(&exercise, bw));
                exercise
            })
            .collect();

        StrengthPrescription {
            zone,
            intensity,
            focus: focus.to_owned(),
            exercises,
        }
    }
}

/// Working load as `round(body_weight x multiplier)`; `None` without a multiplier
#[must_use]
pub fn estimate_weight_kg(exercise: &Exercise, body_weight_kg: f64) -> Option<u32> {
    if !body_weight_kg.is_finite() || body_weight_kg <= 0.0 {
        return None;
    }
    exercise.body_weight_multiplier.map(|multiplier| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let load = (body_weight_kg * multiplier).round().max(0.0) as u32;
        load
    })
}
