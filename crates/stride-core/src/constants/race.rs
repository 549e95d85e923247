// ABOUTME: Race time model coefficients for 100m, 200m, and 400m predictions
// ABOUTME: Sustain fractions, profile nudges, age and readiness modifiers, and phase model geometry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Fraction of peak velocity averaged over 100m
pub const SUSTAIN_FRACTION_100: f64 = 0.91;
/// Fraction of peak velocity averaged over 200m
pub const SUSTAIN_FRACTION_200: f64 = 0.88;
/// Fraction of peak velocity averaged over 400m
pub const SUSTAIN_FRACTION_400: f64 = 0.78;
/// Fraction used by the planner for distances beyond 400m
pub const SUSTAIN_FRACTION_LONG: f64 = 0.70;

/// Speed endurance index considered typical
pub const SPEED_ENDURANCE_REFERENCE: f64 = 0.85;
/// Scale applied to the speed endurance deviation for 200m
pub const ENDURANCE_NUDGE_SCALE_200: f64 = 0.4;
/// Scale applied to the speed endurance deviation for 400m
pub const ENDURANCE_NUDGE_SCALE_400: f64 = 0.6;
/// Bounds on the 200m sustain fraction after nudging
pub const SUSTAIN_BOUNDS_200: (f64, f64) = (0.82, 0.93);
/// Bounds on the 400m sustain fraction after nudging
pub const SUSTAIN_BOUNDS_400: (f64, f64) = (0.70, 0.85);
/// Endurance intervals needed before the profile nudges 200m/400m
pub const MIN_ENDURANCE_INTERVALS: usize = 2;

/// Acceleration intervals needed before the profile boosts 100m
pub const MIN_ACCELERATION_INTERVALS: usize = 3;
/// Average acceleration time (s) below which 100m is boosted
pub const ACCELERATION_TIME_TARGET_S: f64 = 4.5;
/// Sustain fraction gained per second under the acceleration target
pub const ACCELERATION_BOOST_PER_SECOND: f64 = 0.01;
/// Ceiling on the boosted 100m sustain fraction
pub const SUSTAIN_CAP_100: f64 = 0.95;

/// Weight of flying velocity in the effective peak blend
pub const FLYING_BLEND_WEIGHT: f64 = 0.6;
/// Weight of the raw peak in the effective peak blend
pub const RAW_PEAK_BLEND_WEIGHT: f64 = 0.4;
/// Effective peak never exceeds this multiple of the raw peak
pub const EFFECTIVE_PEAK_CAP_RATIO: f64 = 1.02;

/// Age after which speed declines
pub const AGE_PENALTY_START: u32 = 35;
/// Fractional speed lost per year above the start age
pub const AGE_PENALTY_PER_YEAR: f64 = 0.007;
/// Floor on the age factor
pub const AGE_FACTOR_FLOOR: f64 = 0.65;

/// Readiness modifier change per unit of fatigue index deviation
pub const READINESS_SENSITIVITY: f64 = 0.33;
/// TSB above which a freshness bonus applies
pub const FRESH_TSB_THRESHOLD: f64 = 5.0;
/// TSB below which a load penalty applies
pub const LOADED_TSB_THRESHOLD: f64 = -10.0;
/// Modifier change per TSB point beyond either threshold
pub const TSB_NUDGE_PER_POINT: f64 = 0.001;
/// Largest freshness bonus
pub const MAX_TSB_BONUS: f64 = 0.01;
/// Largest load penalty
pub const MAX_TSB_PENALTY: f64 = 0.015;
/// Lower clamp on the readiness modifier
pub const READINESS_MODIFIER_MIN: f64 = 0.95;
/// Upper clamp on the readiness modifier
pub const READINESS_MODIFIER_MAX: f64 = 1.03;

/// Fixed reaction time added to every prediction (s)
pub const REACTION_TIME_S: f64 = 0.15;

/// Activities needed for a high-confidence prediction
pub const HIGH_CONFIDENCE_ACTIVITIES: usize = 10;
/// Activities needed for a moderate-confidence prediction
pub const MODERATE_CONFIDENCE_ACTIVITIES: usize = 3;
/// Endurance and acceleration reps needed for a profile-calibrated note
pub const CALIBRATED_PROFILE_INTERVALS: usize = 2;

/// Average acceleration-phase speed as a fraction of peak
pub const ACCELERATION_PHASE_VELOCITY_RATIO: f64 = 0.55;
/// Distance (m) of a typical acceleration rep the profile time is measured over
pub const ACCELERATION_REFERENCE_DISTANCE_M: f64 = 30.0;
/// Profile acceleration samples needed to replace the fixed phase model
pub const MIN_PROFILE_ACCELERATION_SAMPLES: usize = 2;

/// Placeholder shown when no velocity data is available
pub const NO_DATA_DISPLAY: &str = "--";

/// Acceleration phase distance (m) for 100m
pub const ACCELERATION_DISTANCE_100_M: f64 = 30.0;
/// Acceleration phase distance (m) for 200m
pub const ACCELERATION_DISTANCE_200_M: f64 = 40.0;
/// Acceleration phase distance (m) for 400m
pub const ACCELERATION_DISTANCE_400_M: f64 = 50.0;
/// Longest stretch (m) held at top speed in a 100m
pub const MAX_VELOCITY_WINDOW_100_M: f64 = 40.0;
/// Longest stretch (m) held at top speed in a 200m
pub const MAX_VELOCITY_WINDOW_200_M: f64 = 60.0;
/// Longest stretch (m) held at top speed in a 400m
pub const MAX_VELOCITY_WINDOW_400_M: f64 = 80.0;
