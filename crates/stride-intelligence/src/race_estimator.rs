// ABOUTME: Sprint race time prediction blending peak velocity, training profile, age, and readiness
// ABOUTME: Sustain-fraction model for 100m/200m/400m with bounded modifiers and phase breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Race Time Estimator
//!
//! Each distance starts from a base sustain fraction of peak velocity (the share of
//! top speed a sprinter averages over the race). The training profile nudges those
//! fractions, a flying-velocity blend denoises single-sample peak spikes, and age
//! and readiness scale the result:
//!
//! ```text
//! avg_speed = effective_peak x sustain_fraction x age_factor x readiness_modifier
//! predicted = distance / avg_speed + reaction_time
//! ```
//!
//! Every modifier is capped or clamped so extreme inputs cannot produce
//! physiologically absurd predictions. A non-positive peak velocity short-circuits
//! to a "no data" sentinel instead of dividing by zero.

use crate::numeric::round_to;
use stride_core::constants::race::{
    ACCELERATION_BOOST_PER_SECOND, ACCELERATION_DISTANCE_100_M, ACCELERATION_DISTANCE_200_M,
    ACCELERATION_DISTANCE_400_M, ACCELERATION_PHASE_VELOCITY_RATIO,
    ACCELERATION_REFERENCE_DISTANCE_M, ACCELERATION_TIME_TARGET_S, AGE_FACTOR_FLOOR,
    AGE_PENALTY_PER_YEAR, AGE_PENALTY_START, CALIBRATED_PROFILE_INTERVALS,
    EFFECTIVE_PEAK_CAP_RATIO, ENDURANCE_NUDGE_SCALE_200, ENDURANCE_NUDGE_SCALE_400,
    FLYING_BLEND_WEIGHT, FRESH_TSB_THRESHOLD, HIGH_CONFIDENCE_ACTIVITIES, LOADED_TSB_THRESHOLD,
    MAX_TSB_BONUS, MAX_TSB_PENALTY, MAX_VELOCITY_WINDOW_100_M, MAX_VELOCITY_WINDOW_200_M,
    MAX_VELOCITY_WINDOW_400_M, MIN_ACCELERATION_INTERVALS, MIN_ENDURANCE_INTERVALS,
    MIN_PROFILE_ACCELERATION_SAMPLES, MODERATE_CONFIDENCE_ACTIVITIES, NO_DATA_DISPLAY,
    RAW_PEAK_BLEND_WEIGHT, REACTION_TIME_S, READINESS_MODIFIER_MAX, READINESS_MODIFIER_MIN,
    READINESS_SENSITIVITY, SPEED_ENDURANCE_REFERENCE, SUSTAIN_BOUNDS_200, SUSTAIN_BOUNDS_400,
    SUSTAIN_CAP_100, SUSTAIN_FRACTION_100, SUSTAIN_FRACTION_200, SUSTAIN_FRACTION_400,
    TSB_NUDGE_PER_POINT,
};
use stride_core::constants::readiness::NEUTRAL_FATIGUE_INDEX;
use stride_core::models::{
    ConfidenceBand, PhaseBreakdown, RaceDistance, RacePrediction, TrainingProfile,
};
use tracing::debug;

/// Inputs to a race prediction
#[derive(Debug, Clone, Copy)]
pub struct RaceContext<'a> {
    /// Best recorded peak velocity (m/s)
    pub peak_velocity: f64,
    /// Training profile, when one has been built
    pub profile: Option<&'a TrainingProfile>,
    /// Athlete age in years
    pub age: u32,
    /// Current fatigue index (1.0 = baseline)
    pub fatigue_index: f64,
    /// Current training stress balance
    pub training_stress_balance: f64,
    /// Number of historical activities backing the peak velocity
    pub activity_count: usize,
}

impl<'a> RaceContext<'a> {
    /// Context with neutral readiness, no profile, and no history
    #[must_use]
    pub const fn new(peak_velocity: f64) -> Self {
        Self {
            peak_velocity,
            profile: None,
            age: 0,
            fatigue_index: NEUTRAL_FATIGUE_INDEX,
            training_stress_balance: 0.0,
            activity_count: 0,
        }
    }

    /// Attach a training profile
    #[must_use]
    pub const fn with_profile(mut self, profile: &'a TrainingProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Set the athlete age
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Set the readiness signals
    #[must_use]
    pub const fn with_readiness(
        mut self,
        fatigue_index: f64,
        training_stress_balance: f64,
    ) -> Self {
        self.fatigue_index = fatigue_index;
        self.training_stress_balance = training_stress_balance;
        self
    }

    /// Set the number of historical activities
    #[must_use]
    pub const fn with_activity_count(mut self, activity_count: usize) -> Self {
        self.activity_count = activity_count;
        self
    }

    fn has_data(&self) -> bool {
        self.peak_velocity.is_finite() && self.peak_velocity > 0.0
    }
}

/// Race time prediction engine
pub struct RaceTimeEstimator;

impl RaceTimeEstimator {
    /// Predictions for 100m, 200m, and 400m, in that order
    #[must_use]
    pub fn estimate(context: &RaceContext<'_>) -> Vec<RacePrediction> {
        RaceDistance::ALL
            .iter()
            .map(|distance| Self::predict(context, *distance))
            .collect()
    }

    /// Prediction for one distance
    #[must_use]
    pub fn predict(context: &RaceContext<'_>, distance: RaceDistance) -> RacePrediction {
        if !context.has_data() {
            debug!(
                peak_velocity = context.peak_velocity,
                distance = %distance,
                "No peak velocity, returning no-data prediction"
            );
            return Self::no_data(distance);
        }

        let effective_peak = Self::effective_peak_velocity(context.peak_velocity, context.profile);
        let sustain_fraction = Self::sustain_fraction(distance, context.profile);
        let age_factor = Self::age_factor(context.age);
        let readiness_modifier =
            Self::readiness_modifier(context.fatigue_index, context.training_stress_balance);

        let todays_peak = effective_peak * age_factor * readiness_modifier;
        let avg_speed = todays_peak * sustain_fraction;
        let meters = f64::from(distance.meters());
        let predicted_seconds = round_to(meters / avg_speed + REACTION_TIME_S, 2);

        RacePrediction {
            distance,
            predicted_seconds,
            display: Self::format_time(predicted_seconds),
            confidence: Self::confidence(context),
            note: Self::note(context, effective_peak, readiness_modifier),
            phases: Self::phase_breakdown(
                distance,
                predicted_seconds,
                effective_peak,
                context.profile,
            ),
        }
    }

    /// Share of peak velocity averaged over the distance, after profile nudges
    #[must_use]
    pub fn sustain_fraction(distance: RaceDistance, profile: Option<&TrainingProfile>) -> f64 {
        match distance {
            RaceDistance::Sprint100 => profile
                .filter(|p| {
                    p.acceleration_interval_count >= MIN_ACCELERATION_INTERVALS
                        && p.avg_acceleration_time_seconds > 0.0
                        && p.avg_acceleration_time_seconds < ACCELERATION_TIME_TARGET_S
                })
                .map_or(SUSTAIN_FRACTION_100, |p| {
                    let boost = (ACCELERATION_TIME_TARGET_S - p.avg_acceleration_time_seconds)
                        * ACCELERATION_BOOST_PER_SECOND;
                    (SUSTAIN_FRACTION_100 + boost).min(SUSTAIN_CAP_100)
                }),
            RaceDistance::Sprint200 => Self::endurance_nudged(
                SUSTAIN_FRACTION_200,
                ENDURANCE_NUDGE_SCALE_200,
                SUSTAIN_BOUNDS_200,
                profile,
            ),
            RaceDistance::Sprint400 => Self::endurance_nudged(
                SUSTAIN_FRACTION_400,
                ENDURANCE_NUDGE_SCALE_400,
                SUSTAIN_BOUNDS_400,
                profile,
            ),
        }
    }

    fn endurance_nudged(
        base: f64,
        scale: f64,
        (min, max): (f64, f64),
        profile: Option<&TrainingProfile>,
    ) -> f64 {
        profile
            .filter(|p| {
                p.endurance_interval_count >= MIN_ENDURANCE_INTERVALS
                    && p.speed_endurance_index > 0.0
            })
            .map_or(base, |p| {
                let deviation = p.speed_endurance_index - SPEED_ENDURANCE_REFERENCE;
                deviation.mul_add(scale, base).clamp(min, max)
            })
    }

    /// Blend of 60% flying velocity and 40% raw peak, capped at 1.02x raw peak
    #[must_use]
    pub fn effective_peak_velocity(peak_velocity: f64, profile: Option<&TrainingProfile>) -> f64 {
        profile
            .map(|p| p.best_flying_velocity)
            .filter(|flying| *flying > 0.0)
            .map_or(peak_velocity, |flying| {
                flying
                    .mul_add(FLYING_BLEND_WEIGHT, peak_velocity * RAW_PEAK_BLEND_WEIGHT)
                    .min(peak_velocity * EFFECTIVE_PEAK_CAP_RATIO)
            })
    }

    /// Speed retained with age: 0.7% per year over 35, never below 0.65
    #[must_use]
    pub fn age_factor(age: u32) -> f64 {
        if age <= AGE_PENALTY_START {
            return 1.0;
        }
        let years_over = f64::from(age - AGE_PENALTY_START);
        years_over
            .mul_add(-AGE_PENALTY_PER_YEAR, 1.0)
            .max(AGE_FACTOR_FLOOR)
    }

    /// Readiness multiplier from fatigue index and TSB, clamped to [0.95, 1.03]
    #[must_use]
    pub fn readiness_modifier(fatigue_index: f64, training_stress_balance: f64) -> f64 {
        let fatigue_shift = (fatigue_index - NEUTRAL_FATIGUE_INDEX) * READINESS_SENSITIVITY;
        let tsb_nudge = if training_stress_balance > FRESH_TSB_THRESHOLD {
            ((training_stress_balance - FRESH_TSB_THRESHOLD) * TSB_NUDGE_PER_POINT)
                .min(MAX_TSB_BONUS)
        } else if training_stress_balance < LOADED_TSB_THRESHOLD {
            -((LOADED_TSB_THRESHOLD - training_stress_balance) * TSB_NUDGE_PER_POINT)
                .min(MAX_TSB_PENALTY)
        } else {
            0.0
        };
        let modifier = 1.0 + fatigue_shift + tsb_nudge;
        if modifier.is_nan() {
            return 1.0;
        }
        modifier.clamp(READINESS_MODIFIER_MIN, READINESS_MODIFIER_MAX)
    }

    /// Confidence from history depth
    #[must_use]
    pub fn confidence(context: &RaceContext<'_>) -> ConfidenceBand {
        if context.activity_count >= HIGH_CONFIDENCE_ACTIVITIES && context.has_data() {
            ConfidenceBand::High
        } else if context.activity_count >= MODERATE_CONFIDENCE_ACTIVITIES {
            ConfidenceBand::Moderate
        } else {
            ConfidenceBand::Low
        }
    }

    /// Split a predicted time into reaction, acceleration, max-velocity, and deceleration
    ///
    /// Phases run at the effective peak; age and readiness only stretch deceleration.
    #[must_use]
    pub fn phase_breakdown(
        distance: RaceDistance,
        predicted_seconds: f64,
        effective_peak: f64,
        profile: Option<&TrainingProfile>,
    ) -> PhaseBreakdown {
        if predicted_seconds <= 0.0 || effective_peak <= 0.0 {
            return PhaseBreakdown::default();
        }

        let (acceleration_distance, max_velocity_window) = Self::phase_geometry(distance);
        let running = (predicted_seconds - REACTION_TIME_S).max(0.0);

        let acceleration = profile
            .filter(|p| {
                p.acceleration_interval_count >= MIN_PROFILE_ACCELERATION_SAMPLES
                    && p.avg_acceleration_time_seconds > 0.0
            })
            .map_or_else(
                || acceleration_distance / (ACCELERATION_PHASE_VELOCITY_RATIO * effective_peak),
                |p| {
                    p.avg_acceleration_time_seconds
                        * (acceleration_distance / ACCELERATION_REFERENCE_DISTANCE_M)
                },
            )
            .min(running);

        let max_velocity_distance =
            (f64::from(distance.meters()) - acceleration_distance).min(max_velocity_window);
        let max_velocity = (max_velocity_distance / effective_peak)
            .min(running - acceleration)
            .max(0.0);

        let deceleration = (running - acceleration - max_velocity).max(0.0);

        PhaseBreakdown {
            reaction: REACTION_TIME_S,
            acceleration: round_to(acceleration, 2),
            max_velocity: round_to(max_velocity, 2),
            deceleration: round_to(deceleration, 2),
        }
    }

    const fn phase_geometry(distance: RaceDistance) -> (f64, f64) {
        match distance {
            RaceDistance::Sprint100 => (ACCELERATION_DISTANCE_100_M, MAX_VELOCITY_WINDOW_100_M),
            RaceDistance::Sprint200 => (ACCELERATION_DISTANCE_200_M, MAX_VELOCITY_WINDOW_200_M),
            RaceDistance::Sprint400 => (ACCELERATION_DISTANCE_400_M, MAX_VELOCITY_WINDOW_400_M),
        }
    }

    fn note(context: &RaceContext<'_>, effective_peak: f64, readiness_modifier: f64) -> String {
        let basis = match context.profile {
            Some(p)
                if p.endurance_interval_count >= CALIBRATED_PROFILE_INTERVALS
                    && p.acceleration_interval_count >= CALIBRATED_PROFILE_INTERVALS =>
            {
                format!(
                    "Profile-calibrated from {} endurance and {} acceleration reps",
                    p.endurance_interval_count, p.acceleration_interval_count
                )
            }
            Some(p) if p.best_flying_velocity > 0.0 => format!(
                "Flying velocity {:.2} m/s blended with peak {:.2} m/s",
                p.best_flying_velocity, context.peak_velocity
            ),
            _ => format!("Peak velocity {:.2} m/s only", context.peak_velocity),
        };
        format!(
            "{basis}; effective peak {effective_peak:.2} m/s, readiness x{readiness_modifier:.3}"
        )
    }

    fn no_data(distance: RaceDistance) -> RacePrediction {
        RacePrediction {
            distance,
            predicted_seconds: 0.0,
            display: NO_DATA_DISPLAY.to_owned(),
            confidence: ConfidenceBand::Low,
            note: "No velocity data available".to_owned(),
            phases: PhaseBreakdown::default(),
        }
    }

    /// Format seconds as `SS.ssS` under a minute and `M:SS.ss` above
    #[must_use]
    pub fn format_time(seconds: f64) -> String {
        if seconds <= 0.0 || !seconds.is_finite() {
            return NO_DATA_DISPLAY.to_owned();
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let centis = (seconds * 100.0).round() as u64;
        let minutes = centis / 6_000;
        let rem = centis % 6_000;
        if minutes == 0 {
            format!("{}.{:02}s", rem / 100, rem % 100)
        } else {
            format!("{minutes}:{:02}.{:02}", rem / 100, rem % 100)
        }
    }
}
