// ABOUTME: Race prediction types for the standard sprint distances
// ABOUTME: Distance enumeration, confidence band, and per-phase time breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard sprint race distances
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RaceDistance {
    /// 100 meters
    #[serde(rename = "100m")]
    Sprint100,
    /// 200 meters
    #[serde(rename = "200m")]
    Sprint200,
    /// 400 meters
    #[serde(rename = "400m")]
    Sprint400,
}

impl RaceDistance {
    /// All distances, shortest first
    pub const ALL: [Self; 3] = [Self::Sprint100, Self::Sprint200, Self::Sprint400];

    /// Distance in meters
    #[must_use]
    pub const fn meters(self) -> u32 {
        match self {
            Self::Sprint100 => 100,
            Self::Sprint200 => 200,
            Self::Sprint400 => 400,
        }
    }

    /// Look up a standard distance by meters
    #[must_use]
    pub const fn from_meters(meters: u32) -> Option<Self> {
        match meters {
            100 => Some(Self::Sprint100),
            200 => Some(Self::Sprint200),
            400 => Some(Self::Sprint400),
            _ => None,
        }
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.meters())
    }
}

/// How much history backs a prediction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    /// 10+ activities with a known peak
    High,
    /// 3+ activities
    Moderate,
    /// Anything less
    Low,
}

/// Split of a predicted time into race phases (seconds, each non-negative)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PhaseBreakdown {
    /// Fixed reaction time
    pub reaction: f64,
    /// Drive phase up to near-top speed
    pub acceleration: f64,
    /// Time spent at effective peak velocity
    pub max_velocity: f64,
    /// Whatever running time remains
    pub deceleration: f64,
}

impl PhaseBreakdown {
    /// Sum of all phases
    #[must_use]
    pub fn total(&self) -> f64 {
        self.reaction + self.acceleration + self.max_velocity + self.deceleration
    }
}

/// Predicted finish for one distance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RacePrediction {
    /// Race distance
    pub distance: RaceDistance,
    /// Predicted finish time (s); 0 when there is no data
    pub predicted_seconds: f64,
    /// Formatted time, or the no-data placeholder
    pub display: String,
    /// Confidence band
    pub confidence: ConfidenceBand,
    /// What the prediction is based on
    pub note: String,
    /// Phase split of the predicted time
    pub phases: PhaseBreakdown,
}

impl RacePrediction {
    /// Whether this is the no-data sentinel
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        self.predicted_seconds <= 0.0
    }
}
