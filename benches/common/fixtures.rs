// ABOUTME: Benchmark fixtures for generating deterministic sprint telemetry
// ABOUTME: Synthetic velocity streams, session histories, and athlete snapshots of configurable size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating sprint telemetry.
//!
//! Streams are built from a fixed rep pattern so every run measures the same input.

use chrono::{Days, NaiveDate};
use stride::models::{
    ActivityRecord, AthleteProfile, RaceEvent, TrainingLoad, WellnessRecord,
};
use stride::AthleteSnapshot;

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A week of sessions
    Small,
    /// A training block
    Medium,
    /// A full season
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 7,
            Self::Medium => 40,
            Self::Large => 200,
        }
    }
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// One sprint session at 1 Hz: accelerations, flys, and an endurance rep
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn session_stream(top_speed: f64) -> Vec<f64> {
    let mut stream = vec![0.0; 30];
    for rep in 0..4 {
        let top = (rep as f64).mul_add(0.05, top_speed * 0.9);
        stream.extend([2.0, 4.5, 6.5, top * 0.9, top]);
        stream.extend([0.0; 90]);
    }
    for _ in 0..3 {
        stream.extend([top_speed * 0.7, top_speed * 0.9]);
        stream.extend([top_speed; 5]);
        stream.extend([0.0; 180]);
    }
    stream.extend(vec![top_speed * 0.8; 30]);
    stream.extend([0.0; 300]);
    stream
}

/// A long stream made of repeated sessions, roughly `minutes` long
#[must_use]
pub fn long_stream(minutes: usize) -> Vec<f64> {
    let session = session_stream(9.5);
    session
        .iter()
        .copied()
        .cycle()
        .take(minutes * 60)
        .collect()
}

/// Session history, oldest first
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_history(size: HistorySize) -> Vec<ActivityRecord> {
    let start = base_date();
    (0..size.count())
        .map(|index| {
            let stream = session_stream(9.3 + (index % 5) as f64 * 0.1);
            let peak = stream.iter().copied().fold(0.0, f64::max);
            ActivityRecord {
                id: format!("bench_activity_{index}"),
                date: start.checked_add_days(Days::new(index as u64)),
                velocity_stream: Some(stream),
                peak_velocity: peak,
            }
        })
        .collect()
}

/// Complete snapshot backed by a history of the given size
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_snapshot(size: HistorySize) -> AthleteSnapshot {
    let history = generate_history(size);
    let today = base_date()
        .checked_add_days(Days::new(size.count() as u64))
        .unwrap_or_default();
    let wellness = (0..14_u64)
        .filter_map(|offset| {
            today.checked_sub_days(Days::new(offset)).map(|date| WellnessRecord {
                date,
                hrv: Some(60.0 + (offset % 4) as f64),
            })
        })
        .collect();

    AthleteSnapshot {
        activity: ActivityRecord {
            id: "bench_today".to_owned(),
            date: Some(today),
            velocity_stream: Some(session_stream(9.4)),
            peak_velocity: 9.4,
        },
        history,
        training_load: TrainingLoad::new(62.0, 58.0),
        wellness,
        athlete: AthleteProfile {
            age: 34,
            body_weight_kg: Some(78.0),
        },
        events: vec![
            RaceEvent {
                name: "Conference 200m".to_owned(),
                distance_meters: 200,
                days_until: 24,
            },
            RaceEvent {
                name: "Open 100m".to_owned(),
                distance_meters: 100,
                days_until: 9,
            },
            RaceEvent {
                name: "Championship 400m".to_owned(),
                distance_meters: 400,
                days_until: 52,
            },
        ],
    }
}
