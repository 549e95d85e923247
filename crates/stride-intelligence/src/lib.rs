// ABOUTME: Sprint intelligence engine turning velocity telemetry into readiness and prescriptions
// ABOUTME: Interval parsing, profile building, readiness scoring, race prediction, and rule tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! Every operation in this crate is a pure, synchronous function of its explicit
//! inputs: no hidden state, no I/O, no suspension points. Degenerate inputs are
//! defaulted (empty streams, missing baselines, zero peak velocity) so the core
//! has no fatal error paths.
//!
//! Data flow:
//!
//! ```text
//! velocity stream -> interval_parser -> training_profile ---+
//! wellness + load -> readiness -----------------------------+-> race_estimator
//!                                                           +-> prescription
//! ```

mod numeric;

/// Environment-driven analysis configuration
pub mod config;

/// Segments a 1 Hz velocity stream into classified effort intervals
pub mod interval_parser;

/// Aggregates intervals into a capability profile
pub mod training_profile;

/// Fatigue index, recovery score, recovery window, and stale-signal detection
pub mod readiness;

/// Predicts 100m/200m/400m times from peak velocity, profile, age, and readiness
pub mod race_estimator;

/// Strength zone, sprint workout, and multi-race planning rule tables
pub mod prescription;

/// Baseline and input preparation helpers for upstream records
pub mod baselines;

/// End-to-end composition of the scoring pipeline
pub mod report;

pub use config::{AnalysisConfig, ConfigError};
pub use interval_parser::IntervalParser;
pub use race_estimator::{RaceContext, RaceTimeEstimator};
pub use readiness::ReadinessScorer;
pub use report::{build_report, AthleteReport, AthleteSnapshot};
pub use training_profile::TrainingProfileBuilder;
