// ABOUTME: Readiness domain types for fatigue index status, HRV signal, and recovery state
// ABOUTME: Traffic-light status band plus the composite state returned to presentation layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light band derived from the fatigue index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusBand {
    /// Output at or near baseline
    Green,
    /// Mild suppression
    Amber,
    /// Marked suppression
    Red,
}

impl StatusBand {
    /// Lowercase label matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for StatusBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Today's HRV against its 7-day average
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HrvSignal {
    /// Most recent HRV reading (ms)
    pub current_hrv: f64,
    /// Mean HRV over the trailing 7 days (ms)
    pub avg_hrv_7d: f64,
}

impl HrvSignal {
    /// Create a signal from a reading and its baseline
    #[must_use]
    pub const fn new(current_hrv: f64, avg_hrv_7d: f64) -> Self {
        Self {
            current_hrv,
            avg_hrv_7d,
        }
    }

    /// Current over average, or `None` when the average is unusable
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        let ratio = self.current_hrv / self.avg_hrv_7d;
        (self.avg_hrv_7d > 0.0 && ratio.is_finite()).then_some(ratio)
    }
}

/// Recovery window with the freshness-adjusted score it was derived from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SmartRecoveryWindow {
    /// Recommended hours before the next high-intensity session
    pub hours: u32,
    /// Recovery score after the stale-signal adjustment (0-100)
    pub recovery_score: u8,
    /// Whether a depressed fatigue index was treated as detraining
    pub is_stale_signal: bool,
}

/// Complete readiness picture for one refresh of the inputs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReadinessState {
    /// Today's peak over baseline peak; 1.0 is baseline
    pub fatigue_index: f64,
    /// Band derived from the fatigue index
    pub status_band: StatusBand,
    /// Freshness-adjusted recovery score (0-100)
    pub recovery_score: u8,
    /// Recommended recovery window (hours, at least 48)
    pub recovery_window_hours: u32,
    /// Whether the fatigue index reading looks like detraining rather than fatigue
    pub is_stale_signal: bool,
}
