// ABOUTME: Readiness scoring constants for fatigue index, recovery score, and recovery window
// ABOUTME: Status band edges, sub-score normalization spans, composite weights, and hour offsets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Fatigue index reported when no usable baseline exists
pub const NEUTRAL_FATIGUE_INDEX: f64 = 1.0;

/// Fatigue index strictly above this is green
pub const GREEN_THRESHOLD: f64 = 0.97;

/// Fatigue index at or above this (and not green) is amber; below is red
pub const AMBER_FLOOR: f64 = 0.94;

/// HRV ratio mapped to a zero sub-score
pub const HRV_RATIO_FLOOR: f64 = 0.75;

/// HRV ratio span mapped onto 0-100
pub const HRV_RATIO_SPAN: f64 = 0.30;

/// Offset added to TSB before normalization
pub const TSB_OFFSET: f64 = 20.0;

/// TSB span mapped onto 0-100
pub const TSB_SPAN: f64 = 40.0;

/// Fatigue index mapped to a zero sub-score
pub const FATIGUE_INDEX_FLOOR: f64 = 0.90;

/// Fatigue index span mapped onto 0-100
pub const FATIGUE_INDEX_SPAN: f64 = 0.10;

/// HRV sub-score weight
pub const HRV_WEIGHT: f64 = 0.45;

/// TSB sub-score weight
pub const TSB_WEIGHT: f64 = 0.30;

/// Fatigue index sub-score weight
pub const FATIGUE_WEIGHT: f64 = 0.25;

/// Minimum recommended recovery window (hours)
pub const BASE_RECOVERY_HOURS: u32 = 48;

/// Age after which the recovery window grows
pub const RECOVERY_AGE_THRESHOLD: u32 = 40;

/// Extra recovery hours per year above the age threshold
pub const RECOVERY_HOURS_PER_YEAR: u32 = 6;

/// Extra hours added at a recovery score of zero
pub const RECOVERY_DEFICIT_HOURS: f64 = 48.0;

/// Number of historical peaks averaged into the fatigue baseline
pub const DEFAULT_BASELINE_WINDOW: usize = 7;

/// Days of wellness history averaged into the HRV baseline
pub const DEFAULT_HRV_WINDOW_DAYS: u32 = 7;
