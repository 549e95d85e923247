// ABOUTME: Classified effort interval produced by segmenting a velocity stream
// ABOUTME: Distance-band classification with fixed, non-overlapping boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::intervals::{ACCELERATION_MAX_M, MAX_VELOCITY_MAX_M, SPEED_ENDURANCE_MAX_M};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Training classification of a rep, derived from its distance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntervalClass {
    /// Up to 40m
    Acceleration,
    /// 41-80m
    MaxVelocity,
    /// 81-150m
    SpeedEndurance,
    /// Over 150m
    SpecialEndurance,
}

impl IntervalClass {
    /// Classify a rep by its rounded distance in meters
    #[must_use]
    pub const fn from_distance(distance_meters: u32) -> Self {
        if distance_meters <= ACCELERATION_MAX_M {
            Self::Acceleration
        } else if distance_meters <= MAX_VELOCITY_MAX_M {
            Self::MaxVelocity
        } else if distance_meters <= SPEED_ENDURANCE_MAX_M {
            Self::SpeedEndurance
        } else {
            Self::SpecialEndurance
        }
    }

    /// Speed endurance and special endurance reps
    #[must_use]
    pub const fn is_endurance(self) -> bool {
        matches!(self, Self::SpeedEndurance | Self::SpecialEndurance)
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Acceleration => "Acceleration",
            Self::MaxVelocity => "Max Velocity",
            Self::SpeedEndurance => "Speed Endurance",
            Self::SpecialEndurance => "Special Endurance",
        }
    }
}

impl fmt::Display for IntervalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single effort burst; immutable once produced by the parser
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrackInterval {
    /// Distance-band classification
    pub classification: IntervalClass,
    /// Rounded sum of the burst's samples (m), always at least the minimum rep distance
    pub distance_meters: u32,
    /// Highest single sample in the burst (m/s)
    pub peak_velocity: f64,
    /// Number of samples in the burst (s)
    pub duration_seconds: u32,
    /// Best sliding-window mean speed in the burst (m/s, 2 decimals)
    pub flying_velocity: f64,
}

impl TrackInterval {
    /// Mean speed over the whole rep (m/s)
    #[must_use]
    pub fn average_velocity(&self) -> f64 {
        if self.duration_seconds == 0 {
            return 0.0;
        }
        f64::from(self.distance_meters) / f64::from(self.duration_seconds)
    }
}
