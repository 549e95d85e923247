// ABOUTME: Training capability profile aggregated from classified intervals
// ABOUTME: Speed endurance index, best flying velocity, and acceleration time summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Compact capability profile, recomputed on demand from an interval set
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TrainingProfile {
    /// Mean of endurance-rep average speed over reference peak, in [0, 1]; 0 when undefined
    pub speed_endurance_index: f64,
    /// Best flying velocity across all reps (m/s); 0 when none
    pub best_flying_velocity: f64,
    /// Mean duration of acceleration reps (s); 0 when none
    pub avg_acceleration_time_seconds: f64,
    /// Number of speed endurance and special endurance reps
    pub endurance_interval_count: usize,
    /// Number of acceleration reps
    pub acceleration_interval_count: usize,
}

impl TrainingProfile {
    /// True when no rep contributed anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endurance_interval_count == 0
            && self.acceleration_interval_count == 0
            && self.best_flying_velocity <= 0.0
    }
}
