// ABOUTME: Aggregates classified intervals into a compact training capability profile
// ABOUTME: Speed endurance index, best flying velocity, and mean acceleration time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Profile Builder
//!
//! Pure aggregation over a complete interval set; order does not matter. The
//! caller is responsible for batching every interval in the window being
//! summarized, since partial or streaming updates are not supported.

use crate::numeric::{mean, round_to};
use stride_core::models::{IntervalClass, TrackInterval, TrainingProfile};
use tracing::debug;

/// Builds a `TrainingProfile` from intervals and a reference peak velocity
pub struct TrainingProfileBuilder;

impl TrainingProfileBuilder {
    /// Aggregate intervals spanning one or many sessions
    ///
    /// `reference_peak_velocity` normalizes endurance-rep average speeds; when it is
    /// not positive the speed endurance index is undefined and reported as 0.
    #[must_use]
    pub fn build(intervals: &[TrackInterval], reference_peak_velocity: f64) -> TrainingProfile {
        let endurance: Vec<&TrackInterval> = intervals
            .iter()
            .filter(|i| i.classification.is_endurance())
            .collect();
        let acceleration: Vec<&TrackInterval> = intervals
            .iter()
            .filter(|i| i.classification == IntervalClass::Acceleration)
            .collect();

        let speed_endurance_index =
            Self::speed_endurance_index(&endurance, reference_peak_velocity);

        let best_flying_velocity = intervals
            .iter()
            .map(|i| i.flying_velocity)
            .filter(|v| *v > 0.0)
            .fold(0.0, f64::max);

        let avg_acceleration_time_seconds = mean(
            acceleration
                .iter()
                .map(|i| f64::from(i.duration_seconds)),
        )
        .unwrap_or(0.0);

        TrainingProfile {
            speed_endurance_index,
            best_flying_velocity,
            avg_acceleration_time_seconds,
            endurance_interval_count: endurance.len(),
            acceleration_interval_count: acceleration.len(),
        }
    }

    fn speed_endurance_index(endurance: &[&TrackInterval], reference_peak_velocity: f64) -> f64 {
        if reference_peak_velocity <= 0.0 || !reference_peak_velocity.is_finite() {
            if !endurance.is_empty() {
                debug!(
                    endurance_reps = endurance.len(),
                    "No reference peak velocity, speed endurance index undefined"
                );
            }
            return 0.0;
        }

        mean(
            endurance
                .iter()
                .map(|i| i.average_velocity() / reference_peak_velocity),
        )
        .map_or(0.0, |index| round_to(index.clamp(0.0, 1.0), 3))
    }
}
