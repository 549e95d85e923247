// ABOUTME: End-to-end athlete report composing parsing, scoring, prediction, and prescriptions
// ABOUTME: Validates a snapshot once, then runs the infallible pipeline and builds the write-back series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Athlete Report Pipeline
//!
//! `build_report` is the single entry point callers need. It validates the
//! snapshot and configuration, and from there on every step defaults degenerate
//! input instead of failing.

use crate::baselines::{
    hrv_signal_within, parse_sessions, reference_peak_velocity, rolling_peak_baseline,
    session_peak,
};
use crate::config::AnalysisConfig;
use crate::interval_parser::IntervalParser;
use crate::prescription::{RacePlanner, SprintContext, SprintWorkoutSelector, StrengthPrescriber};
use crate::race_estimator::{RaceContext, RaceTimeEstimator};
use crate::readiness::ReadinessScorer;
use crate::training_profile::TrainingProfileBuilder;
use serde::{Deserialize, Serialize};
use stride_core::constants::data_series::{
    FATIGUE_SERIES_COLOR, FATIGUE_SERIES_NAME, FATIGUE_SERIES_SHORT_NAME, FATIGUE_SERIES_UNITS,
};
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{
    ActivityRecord, AthleteProfile, DataSeries, HrvSignal, RaceEvent, RacePlan, RacePrediction,
    ReadinessState, SprintWorkout, StrengthPrescription, TrackInterval, TrainingLoad,
    TrainingProfile, WellnessRecord,
};
use tracing::{debug, info, instrument};

/// Everything known about the athlete at scoring time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AthleteSnapshot {
    /// Today's session
    pub activity: ActivityRecord,
    /// Earlier sessions, oldest first
    #[serde(default)]
    pub history: Vec<ActivityRecord>,
    /// Current fitness/fatigue pair
    #[serde(default)]
    pub training_load: TrainingLoad,
    /// Wellness entries carrying HRV
    #[serde(default)]
    pub wellness: Vec<WellnessRecord>,
    /// Athlete metadata
    pub athlete: AthleteProfile,
    /// Upcoming competitions
    #[serde(default)]
    pub events: Vec<RaceEvent>,
}

impl AthleteSnapshot {
    /// Validate every record in the snapshot
    ///
    /// # Errors
    ///
    /// Returns the first validation error from the activities, load, athlete, or events
    pub fn validate(&self) -> AppResult<()> {
        self.activity.validate()?;
        for activity in &self.history {
            activity.validate()?;
        }
        self.training_load.validate()?;
        self.athlete.validate()?;
        if let Some(event) = self.events.iter().find(|e| e.distance_meters == 0) {
            return Err(AppError::out_of_range(format!(
                "Event {} must have a positive distance",
                event.name
            )));
        }
        Ok(())
    }
}

/// Full output of one scoring run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AthleteReport {
    /// Intervals parsed from today's session
    pub intervals: Vec<TrackInterval>,
    /// Profile built from today's and historical intervals
    pub profile: TrainingProfile,
    /// Readiness state for today
    pub readiness: ReadinessState,
    /// 100m, 200m, and 400m predictions
    pub predictions: Vec<RacePrediction>,
    /// Strength session for the current load
    pub strength: StrengthPrescription,
    /// Sprint session for today's readiness
    pub sprint_workout: SprintWorkout,
    /// One plan per upcoming event, nearest first
    pub race_plans: Vec<RacePlan>,
    /// Fatigue index series for write-back to the activity
    pub fatigue_series: DataSeries,
}

/// Fatigue index broadcast across every velocity sample of a session
#[must_use]
pub fn fatigue_index_series(fatigue_index: f64, sample_count: usize) -> DataSeries {
    DataSeries {
        name: FATIGUE_SERIES_NAME.to_owned(),
        short_name: FATIGUE_SERIES_SHORT_NAME.to_owned(),
        units: FATIGUE_SERIES_UNITS.to_owned(),
        values: vec![fatigue_index; sample_count],
        color: FATIGUE_SERIES_COLOR.to_owned(),
    }
}

/// Run the complete scoring pipeline for one snapshot
///
/// # Errors
///
/// Returns an error if the configuration or the snapshot fails validation
#[instrument(
    skip_all,
    fields(activity_id = %snapshot.activity.id, history = snapshot.history.len())
)]
pub fn build_report(
    snapshot: &AthleteSnapshot,
    config: &AnalysisConfig,
) -> AppResult<AthleteReport> {
    config.validate()?;
    snapshot.validate()?;

    let parser = IntervalParser::from_config(config);
    let intervals = parser.parse(snapshot.activity.samples());

    let mut all_intervals = parse_sessions(&parser, &snapshot.history);
    all_intervals.extend_from_slice(&intervals);

    let mut sessions = snapshot.history.clone();
    sessions.push(snapshot.activity.clone());
    let reference_peak = reference_peak_velocity(&sessions);
    let profile = TrainingProfileBuilder::build(&all_intervals, reference_peak);

    let historical_peaks: Vec<f64> = snapshot.history.iter().map(session_peak).collect();
    let baseline_peak = rolling_peak_baseline(&historical_peaks, config.baseline_window);
    let current_peak = session_peak(&snapshot.activity);

    let hrv = hrv_signal_within(&snapshot.wellness, config.hrv_window_days).unwrap_or_else(|| {
        debug!("No HRV readings, scoring HRV as neutral");
        HrvSignal::new(1.0, 1.0)
    });
    let tsb = snapshot.training_load.training_stress_balance();
    let age = snapshot.athlete.age;

    let readiness = ReadinessScorer::assess(current_peak, baseline_peak, &hrv, tsb, age);

    let race_context = RaceContext::new(reference_peak)
        .with_profile(&profile)
        .with_age(age)
        .with_readiness(readiness.fatigue_index, tsb)
        .with_activity_count(sessions.len());
    let predictions = RaceTimeEstimator::estimate(&race_context);

    let strength = StrengthPrescriber::prescribe(tsb, snapshot.athlete.body_weight_kg);
    let sprint_workout = SprintWorkoutSelector::select(
        readiness.status_band,
        readiness.fatigue_index,
        Some(SprintContext {
            training_stress_balance: tsb,
        }),
    );
    let race_plans = RacePlanner::plan(&snapshot.events, reference_peak, age);
    let fatigue_series =
        fatigue_index_series(readiness.fatigue_index, snapshot.activity.sample_count());

    info!(
        activity_id = %snapshot.activity.id,
        intervals = intervals.len(),
        fatigue_index = readiness.fatigue_index,
        status = %readiness.status_band,
        recovery_score = readiness.recovery_score,
        "Athlete report built"
    );

    Ok(AthleteReport {
        intervals,
        profile,
        readiness,
        predictions,
        strength,
        sprint_workout,
        race_plans,
        fatigue_series,
    })
}
