// ABOUTME: Segments a 1 Hz velocity stream into discrete effort bursts
// ABOUTME: Classifies each burst by distance band and measures peak and flying velocity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Interval Parser
//!
//! Walks a per-second velocity stream and groups consecutive samples at or above a
//! moving threshold into bursts. Each sample covers one second, so a burst's
//! distance is the sum of its samples. Bursts shorter than the minimum rep distance
//! are discarded as noise; a burst still open at the end of the stream is closed
//! as if one more below-threshold sample followed.

use crate::config::AnalysisConfig;
use crate::numeric::round_to;
use stride_core::constants::intervals::{
    FLYING_WINDOW_SAMPLES, MIN_REP_DISTANCE_M, MOVING_THRESHOLD_MPS,
};
use stride_core::models::{IntervalClass, TrackInterval};
use tracing::{debug, warn};

/// Stateless segmenter for velocity streams
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalParser {
    moving_threshold_mps: f64,
    min_rep_distance_m: f64,
}

impl Default for IntervalParser {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalParser {
    /// Parser with the standard 1.0 m/s threshold and 10m minimum rep
    #[must_use]
    pub const fn new() -> Self {
        Self {
            moving_threshold_mps: MOVING_THRESHOLD_MPS,
            min_rep_distance_m: MIN_REP_DISTANCE_M,
        }
    }

    /// Parser with custom thresholds
    #[must_use]
    pub const fn with_thresholds(moving_threshold_mps: f64, min_rep_distance_m: f64) -> Self {
        Self {
            moving_threshold_mps,
            min_rep_distance_m,
        }
    }

    /// Parser using the thresholds from an analysis configuration
    #[must_use]
    pub const fn from_config(config: &AnalysisConfig) -> Self {
        Self::with_thresholds(config.moving_threshold_mps, config.min_rep_distance_m)
    }

    /// Segment a stream into classified intervals, preserving session order
    ///
    /// Non-finite samples never meet the threshold and so end a burst.
    #[must_use]
    pub fn parse(&self, samples: &[f64]) -> Vec<TrackInterval> {
        let mut intervals = Vec::new();
        let mut burst_start: Option<usize> = None;
        let mut non_finite = 0_usize;

        for (index, &velocity) in samples.iter().enumerate() {
            if !velocity.is_finite() {
                non_finite += 1;
            }
            let moving = velocity.is_finite() && velocity >= self.moving_threshold_mps;
            match (moving, burst_start) {
                (true, None) => burst_start = Some(index),
                (false, Some(start)) => {
                    intervals.extend(self.close_burst(&samples[start..index]));
                    burst_start = None;
                }
                _ => {}
            }
        }

        if let Some(start) = burst_start {
            intervals.extend(self.close_burst(&samples[start..]));
        }

        if non_finite > 0 {
            warn!(
                non_finite,
                samples = samples.len(),
                "Velocity stream contains non-finite samples, treated as stationary"
            );
        }

        intervals
    }

    /// Parse an optional stream; a missing stream yields no intervals
    #[must_use]
    pub fn parse_optional(&self, samples: Option<&[f64]>) -> Vec<TrackInterval> {
        samples.map_or_else(Vec::new, |s| self.parse(s))
    }

    fn close_burst(&self, burst: &[f64]) -> Option<TrackInterval> {
        let distance: f64 = burst.iter().sum();
        if distance < self.min_rep_distance_m {
            debug!(
                samples = burst.len(),
                distance_m = distance,
                "Discarding burst below minimum rep distance"
            );
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let distance_meters = distance.round() as u32;
        let duration_seconds = u32::try_from(burst.len()).unwrap_or(u32::MAX);
        let peak_velocity = burst.iter().copied().fold(0.0, f64::max);

        Some(TrackInterval {
            classification: IntervalClass::from_distance(distance_meters),
            distance_meters,
            peak_velocity,
            duration_seconds,
            flying_velocity: flying_velocity(burst),
        })
    }
}

/// Best mean speed over any window of `min(3, len)` consecutive samples, to 2 decimals
#[must_use]
pub fn flying_velocity(burst: &[f64]) -> f64 {
    let window = FLYING_WINDOW_SAMPLES.min(burst.len());
    if window == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let best = burst
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .fold(0.0, f64::max);
    round_to(best, 2)
}

/// Segment a stream with the standard thresholds
#[must_use]
pub fn parse_intervals(samples: &[f64]) -> Vec<TrackInterval> {
    IntervalParser::new().parse(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flying_velocity_short_burst_uses_whole_burst() {
        assert!((flying_velocity(&[6.0, 8.0]) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flying_velocity_picks_best_window() {
        let v = flying_velocity(&[2.0, 5.0, 7.5, 9.0, 9.2, 3.0]);
        assert!((v - 8.57).abs() < 1e-9);
    }

    #[test]
    fn test_trailing_burst_closed_at_stream_end() {
        let intervals = parse_intervals(&[0.0, 6.0, 7.0, 8.0]);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].distance_meters, 21);
        assert_eq!(intervals[0].duration_seconds, 3);
    }
}
