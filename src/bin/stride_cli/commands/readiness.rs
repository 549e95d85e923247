// ABOUTME: Readiness scoring command for stride-cli
// ABOUTME: Scores fatigue index, recovery score, and recovery window from raw figures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::output::print_json;
use anyhow::Result;
use serde::Serialize;
use stride::intelligence::prescription::{SprintContext, SprintWorkoutSelector};
use stride::intelligence::ReadinessScorer;
use stride::models::{HrvSignal, ReadinessState, SprintWorkout};

/// Raw readiness inputs from the command line
pub struct ReadinessArgs {
    pub current_peak: f64,
    pub baseline_peak: f64,
    pub tsb: f64,
    pub hrv: f64,
    pub hrv_avg: f64,
    pub age: u32,
}

#[derive(Serialize)]
struct ReadinessOutput {
    readiness: ReadinessState,
    sprint_workout: SprintWorkout,
}

/// Score readiness and print it with the matching sprint workout
pub fn run(args: &ReadinessArgs, pretty: bool) -> Result<()> {
    let hrv = HrvSignal::new(args.hrv, args.hrv_avg);
    let readiness =
        ReadinessScorer::assess(args.current_peak, args.baseline_peak, &hrv, args.tsb, args.age);
    let sprint_workout = SprintWorkoutSelector::select(
        readiness.status_band,
        readiness.fatigue_index,
        Some(SprintContext {
            training_stress_balance: args.tsb,
        }),
    );
    print_json(
        &ReadinessOutput {
            readiness,
            sprint_workout,
        },
        pretty,
    )
}
