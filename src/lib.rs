// ABOUTME: Main library entry point for the Stride sprint intelligence toolkit
// ABOUTME: Re-exports the scoring core and adds logging, configuration, and file loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride
//!
//! Converts per-second sprint velocity telemetry plus training-load and wellness
//! signals into classified intervals, readiness scores, race predictions, and
//! rule-based training prescriptions.
//!
//! ## Architecture
//!
//! - **`stride-core`**: error types, constants, and data models
//! - **`stride-intelligence`**: the pure scoring pipeline
//! - **this crate**: logging, environment configuration, snapshot files, and the
//!   `stride-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use stride::config::StrideConfig;
//! use stride::errors::AppResult;
//! use stride::snapshot::report_from_file;
//!
//! fn main() -> AppResult<()> {
//!     let config = StrideConfig::try_from_env()?;
//!     let report = report_from_file(Path::new("snapshot.json"), &config.analysis)?;
//!     println!("Fatigue index: {}", report.readiness.fatigue_index);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Snapshot and velocity stream file loading
pub mod snapshot;

pub use stride_core::{constants, errors, models};
pub use stride_intelligence as intelligence;
pub use stride_intelligence::{build_report, AthleteReport, AthleteSnapshot};
