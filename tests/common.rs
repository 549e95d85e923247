// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and synthetic velocity streams, sessions, and snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `stride`

use chrono::NaiveDate;
use std::env;
use std::sync::Once;
use stride::models::{ActivityRecord, AthleteProfile, RaceEvent, TrainingLoad, WellnessRecord};
use stride::AthleteSnapshot;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date in March 2025
pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

/// A rep at constant speed padded by standing samples on both sides
pub fn rep(speed: f64, seconds: usize) -> Vec<f64> {
    let mut samples = vec![0.0, 0.0];
    samples.extend(vec![speed; seconds]);
    samples.extend([0.0, 0.0]);
    samples
}

/// A short acceleration: ramp from 2 m/s to `top` over 5 samples (about 30 m)
pub fn acceleration_rep(top: f64) -> Vec<f64> {
    let mut samples = vec![0.0];
    samples.extend([2.0, 4.5, 6.5, top * 0.9, top]);
    samples.push(0.0);
    samples
}

/// A training session made of accelerations, flys, and a 150 m+ endurance rep
pub fn training_session(top: f64) -> Vec<f64> {
    let mut stream = Vec::new();
    for _ in 0..3 {
        stream.extend(acceleration_rep(top));
    }
    // ~60 m at top speed
    stream.extend(rep(top, 6));
    // ~200 m endurance rep at 80% of top
    stream.extend(rep(top * 0.8, (200.0 / (top * 0.8)).round() as usize));
    stream
}

/// Activity record with a stream and its recorded peak
pub fn activity(id: &str, date: NaiveDate, stream: Vec<f64>) -> ActivityRecord {
    let peak = stream.iter().copied().fold(0.0, f64::max);
    ActivityRecord {
        id: id.to_owned(),
        date: Some(date),
        velocity_stream: Some(stream),
        peak_velocity: peak,
    }
}

/// Wellness records with the given HRV values on consecutive days ending on the 14th
pub fn wellness(values: &[f64]) -> Vec<WellnessRecord> {
    let start = 15 - u32::try_from(values.len()).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, hrv)| WellnessRecord {
            date: day(start + u32::try_from(i).unwrap()),
            hrv: Some(*hrv),
        })
        .collect()
}

/// Snapshot of a fresh 30-year-old with ten sessions of history and two events
pub fn sample_snapshot() -> AthleteSnapshot {
    let history = (1..=10)
        .map(|d| activity(&format!("h{d}"), day(d), training_session(9.5)))
        .collect();

    AthleteSnapshot {
        activity: activity("today", day(14), training_session(9.4)),
        history,
        training_load: TrainingLoad::new(55.0, 50.0),
        wellness: wellness(&[64.0, 66.0, 65.0, 63.0, 67.0, 65.0, 66.0]),
        athlete: AthleteProfile {
            age: 30,
            body_weight_kg: Some(80.0),
        },
        events: vec![
            RaceEvent {
                name: "Regional 200m".to_owned(),
                distance_meters: 200,
                days_until: 40,
            },
            RaceEvent {
                name: "Club 100m".to_owned(),
                distance_meters: 100,
                days_until: 10,
            },
        ],
    }
}
