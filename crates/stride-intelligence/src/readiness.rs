// ABOUTME: Composite readiness scoring from peak velocity, HRV, and training stress balance
// ABOUTME: Fatigue index, status band, recovery score and window, and stale-signal detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Readiness Scorer
//!
//! Four independently callable operations sharing one set of constants:
//!
//! - **Fatigue index (NFI)**: today's peak sprint velocity over a rolling baseline.
//! - **Recovery score (SRS)**: weighted blend of three clamped 0-100 sub-scores
//!   (HRV ratio 45%, TSB 30%, fatigue index 25%).
//! - **Recovery window**: 48h plus an age surcharge plus a score deficit.
//! - **Stale signal**: a depressed fatigue index while TSB is non-negative points
//!   to detraining rather than neuromuscular fatigue. The freshness-adjusted score
//!   neutralizes the fatigue index in that case.
//!
//! `smart_recovery_window` is the recommended entry point; the unadjusted
//! variants stay public for direct comparison.

use crate::numeric::round_to;
use stride_core::constants::readiness::{
    AMBER_FLOOR, BASE_RECOVERY_HOURS, FATIGUE_INDEX_FLOOR, FATIGUE_INDEX_SPAN, FATIGUE_WEIGHT,
    GREEN_THRESHOLD, HRV_RATIO_FLOOR, HRV_RATIO_SPAN, HRV_WEIGHT, NEUTRAL_FATIGUE_INDEX,
    RECOVERY_AGE_THRESHOLD, RECOVERY_DEFICIT_HOURS, RECOVERY_HOURS_PER_YEAR, TSB_OFFSET,
    TSB_SPAN, TSB_WEIGHT,
};
use stride_core::models::{HrvSignal, ReadinessState, SmartRecoveryWindow, StatusBand};
use tracing::{debug, warn};

/// Readiness scoring operations
pub struct ReadinessScorer;

impl ReadinessScorer {
    /// Today's peak over baseline peak, rounded to 3 decimals
    ///
    /// Returns the neutral 1.0 when the baseline is not a positive speed.
    #[must_use]
    pub fn fatigue_index(current_peak: f64, baseline_peak: f64) -> f64 {
        if baseline_peak.is_nan() || baseline_peak <= 0.0 {
            debug!(baseline_peak, "No usable peak baseline, fatigue index neutral");
            return NEUTRAL_FATIGUE_INDEX;
        }
        let index = round_to(current_peak / baseline_peak, 3);
        if index.is_finite() {
            index
        } else {
            NEUTRAL_FATIGUE_INDEX
        }
    }

    /// Band for a fatigue index; 0.97 and 0.94 are both amber
    #[must_use]
    pub fn status_band(fatigue_index: f64) -> StatusBand {
        if fatigue_index > GREEN_THRESHOLD {
            StatusBand::Green
        } else if fatigue_index >= AMBER_FLOOR {
            StatusBand::Amber
        } else {
            StatusBand::Red
        }
    }

    /// HRV sub-score (0-100) from the current/7-day ratio
    ///
    /// An unusable 7-day average is treated as a neutral ratio of 1.0.
    #[must_use]
    pub fn hrv_score(hrv: &HrvSignal) -> f64 {
        let ratio = hrv.ratio().unwrap_or_else(|| {
            warn!(
                current_hrv = hrv.current_hrv,
                avg_hrv_7d = hrv.avg_hrv_7d,
                "Unusable HRV average, scoring HRV as neutral"
            );
            1.0
        });
        ((ratio - HRV_RATIO_FLOOR) / HRV_RATIO_SPAN * 100.0).clamp(0.0, 100.0)
    }

    /// TSB sub-score (0-100); -20 maps to 0 and +20 to 100
    #[must_use]
    pub fn tsb_score(training_stress_balance: f64) -> f64 {
        ((training_stress_balance + TSB_OFFSET) / TSB_SPAN * 100.0).clamp(0.0, 100.0)
    }

    /// Fatigue index sub-score (0-100); 0.90 maps to 0 and 1.00 to 100
    #[must_use]
    pub fn fatigue_score(fatigue_index: f64) -> f64 {
        ((fatigue_index - FATIGUE_INDEX_FLOOR) / FATIGUE_INDEX_SPAN * 100.0).clamp(0.0, 100.0)
    }

    /// Composite recovery score (0-100) without the stale-signal adjustment
    #[must_use]
    pub fn recovery_score(hrv: &HrvSignal, training_stress_balance: f64, fatigue_index: f64) -> u8 {
        let composite = Self::hrv_score(hrv).mul_add(
            HRV_WEIGHT,
            Self::tsb_score(training_stress_balance).mul_add(
                TSB_WEIGHT,
                Self::fatigue_score(fatigue_index) * FATIGUE_WEIGHT,
            ),
        );
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let score = composite.round().clamp(0.0, 100.0) as u8;
        score
    }

    /// Recommended hours before the next high-intensity session
    ///
    /// `48 + max(0, (age - 40) * 6) + round((1 - score/100) * 48)`; scores above 100 are
    /// treated as 100.
    #[must_use]
    pub fn recovery_window_hours(age: u32, recovery_score: u8) -> u32 {
        let age_hours = age
            .saturating_sub(RECOVERY_AGE_THRESHOLD)
            .saturating_mul(RECOVERY_HOURS_PER_YEAR);
        let score = f64::from(recovery_score.min(100));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let deficit_hours = ((1.0 - score / 100.0) * RECOVERY_DEFICIT_HOURS).round() as u32;
        BASE_RECOVERY_HOURS
            .saturating_add(age_hours)
            .saturating_add(deficit_hours)
    }

    /// Depressed fatigue index with non-negative TSB: detraining, not fatigue
    #[must_use]
    pub fn is_stale_signal(status_band: StatusBand, training_stress_balance: f64) -> bool {
        status_band != StatusBand::Green && training_stress_balance >= 0.0
    }

    /// Recovery score with the fatigue index neutralized when the signal is stale
    #[must_use]
    pub fn freshness_adjusted_recovery_score(
        hrv: &HrvSignal,
        training_stress_balance: f64,
        fatigue_index: f64,
    ) -> u8 {
        let stale =
            Self::is_stale_signal(Self::status_band(fatigue_index), training_stress_balance);
        let effective_index = if stale {
            debug!(
                fatigue_index,
                training_stress_balance, "Stale fatigue signal, neutralizing fatigue index"
            );
            NEUTRAL_FATIGUE_INDEX
        } else {
            fatigue_index
        };
        Self::recovery_score(hrv, training_stress_balance, effective_index)
    }

    /// Freshness-adjusted score, its recovery window, and the stale flag together
    #[must_use]
    pub fn smart_recovery_window(
        age: u32,
        hrv: &HrvSignal,
        training_stress_balance: f64,
        fatigue_index: f64,
    ) -> SmartRecoveryWindow {
        let is_stale_signal =
            Self::is_stale_signal(Self::status_band(fatigue_index), training_stress_balance);
        let recovery_score =
            Self::freshness_adjusted_recovery_score(hrv, training_stress_balance, fatigue_index);
        SmartRecoveryWindow {
            hours: Self::recovery_window_hours(age, recovery_score),
            recovery_score,
            is_stale_signal,
        }
    }

    /// Full readiness state from raw peaks, HRV, TSB, and age
    #[must_use]
    pub fn assess(
        current_peak: f64,
        baseline_peak: f64,
        hrv: &HrvSignal,
        training_stress_balance: f64,
        age: u32,
    ) -> ReadinessState {
        let fatigue_index = Self::fatigue_index(current_peak, baseline_peak);
        let window = Self::smart_recovery_window(age, hrv, training_stress_balance, fatigue_index);
        ReadinessState {
            fatigue_index,
            status_band: Self::status_band(fatigue_index),
            recovery_score: window.recovery_score,
            recovery_window_hours: window.hours,
            is_stale_signal: window.is_stale_signal,
        }
    }
}
