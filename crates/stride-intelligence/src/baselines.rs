// ABOUTME: Prepares scorer inputs from upstream records: HRV signal, peak baselines, parsed sessions
// ABOUTME: Parallel multi-session interval parsing with rayon, results kept in session order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::interval_parser::IntervalParser;
use crate::numeric::mean;
use chrono::{Days, NaiveDate};
use rayon::prelude::*;
use stride_core::constants::readiness::{DEFAULT_BASELINE_WINDOW, DEFAULT_HRV_WINDOW_DAYS};
use stride_core::models::{ActivityRecord, HrvSignal, TrackInterval, WellnessRecord};
use tracing::{debug, instrument};

fn usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Current HRV and its 7-day average from wellness records
#[must_use]
pub fn hrv_signal(records: &[WellnessRecord]) -> Option<HrvSignal> {
    hrv_signal_within(records, DEFAULT_HRV_WINDOW_DAYS)
}

/// Current HRV and its trailing average over `window_days` calendar days
///
/// The current reading is the latest dated record with a positive HRV. The average
/// covers positive readings dated within the window ending on that date, inclusive.
/// Record order does not matter.
#[must_use]
pub fn hrv_signal_within(records: &[WellnessRecord], window_days: u32) -> Option<HrvSignal> {
    let readings: Vec<(NaiveDate, f64)> = records
        .iter()
        .filter_map(|r| r.hrv.filter(|v| usable(*v)).map(|v| (r.date, v)))
        .collect();

    let &(latest_date, current_hrv) = readings.iter().max_by_key(|(date, _)| *date)?;
    let window_start = latest_date
        .checked_sub_days(Days::new(u64::from(window_days.max(1) - 1)))
        .unwrap_or(NaiveDate::MIN);

    let avg_hrv_7d = mean(
        readings
            .iter()
            .filter(|(date, _)| *date >= window_start && *date <= latest_date)
            .map(|(_, v)| *v),
    )
    .unwrap_or(current_hrv);

    Some(HrvSignal::new(current_hrv, avg_hrv_7d))
}

/// Mean of the most recent `window` positive peaks; 0.0 when there are none
///
/// `peaks` is in chronological order, oldest first.
#[must_use]
pub fn rolling_peak_baseline(peaks: &[f64], window: usize) -> f64 {
    let window = if window == 0 {
        DEFAULT_BASELINE_WINDOW
    } else {
        window
    };
    mean(
        peaks
            .iter()
            .rev()
            .copied()
            .filter(|v| usable(*v))
            .take(window),
    )
    .unwrap_or(0.0)
}

/// Peak speed of one session: the recorded peak, or the stream maximum when higher
#[must_use]
pub fn session_peak(activity: &ActivityRecord) -> f64 {
    let stream_peak = activity
        .samples()
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    let recorded = if activity.peak_velocity.is_finite() {
        activity.peak_velocity
    } else {
        0.0
    };
    recorded.max(stream_peak)
}

/// Best peak speed across sessions; 0.0 when none is recorded
#[must_use]
pub fn reference_peak_velocity(sessions: &[ActivityRecord]) -> f64 {
    sessions.iter().map(session_peak).fold(0.0, f64::max)
}

/// Parse many sessions in parallel and concatenate intervals in session order
#[must_use]
#[instrument(skip_all, fields(sessions = sessions.len()))]
pub fn parse_sessions(parser: &IntervalParser, sessions: &[ActivityRecord]) -> Vec<TrackInterval> {
    let per_session: Vec<Vec<TrackInterval>> = sessions
        .par_iter()
        .map(|activity| parser.parse_optional(activity.velocity_stream.as_deref()))
        .collect();

    let intervals: Vec<TrackInterval> = per_session.into_iter().flatten().collect();
    debug!(
        sessions = sessions.len(),
        intervals = intervals.len(),
        "Parsed session history"
    );
    intervals
}
