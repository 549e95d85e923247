// ABOUTME: Loads athlete snapshots and velocity streams from JSON files
// ABOUTME: File and parse failures surface as AppError with storage or format codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;
use stride_core::errors::AppResult;
use stride_intelligence::report::{build_report, AthleteReport, AthleteSnapshot};
use stride_intelligence::AnalysisConfig;
use tracing::debug;

/// Read an `AthleteSnapshot` from a JSON file
///
/// # Errors
///
/// Returns a storage error if the file cannot be read and an invalid-format error
/// if it is not a valid snapshot
pub fn load_snapshot(path: &Path) -> AppResult<AthleteSnapshot> {
    let contents = fs::read_to_string(path)?;
    let snapshot: AthleteSnapshot = serde_json::from_str(&contents)?;
    debug!(
        path = %path.display(),
        activity_id = %snapshot.activity.id,
        history = snapshot.history.len(),
        events = snapshot.events.len(),
        "Loaded athlete snapshot"
    );
    Ok(snapshot)
}

/// Read a JSON array of velocity samples (m/s)
///
/// # Errors
///
/// Returns a storage error if the file cannot be read and an invalid-format error
/// if it is not an array of numbers
pub fn load_velocity_stream(path: &Path) -> AppResult<Vec<f64>> {
    let contents = fs::read_to_string(path)?;
    let samples: Vec<f64> = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), samples = samples.len(), "Loaded velocity stream");
    Ok(samples)
}

/// Load a snapshot file and run the full report pipeline on it
///
/// # Errors
///
/// Returns any load, validation, or configuration error
pub fn report_from_file(path: &Path, config: &AnalysisConfig) -> AppResult<AthleteReport> {
    let snapshot = load_snapshot(path)?;
    build_report(&snapshot, config)
}
