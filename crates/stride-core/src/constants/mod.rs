// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Stride scoring core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Thresholds and model coefficients are grouped by the component that owns them.
//! Several tests assert these values directly, so changes here are behavior changes.

/// Interval segmentation thresholds and distance bands
pub mod intervals;
/// Training prescription rule-table boundaries
pub mod prescription;
/// Race time model coefficients
pub mod race;
/// Fatigue index, recovery score, and recovery window constants
pub mod readiness;

/// Service identity used in structured logs
pub mod service_names {
    /// Library/CLI service name
    pub const STRIDE: &str = "stride";
    /// Command-line tool name
    pub const STRIDE_CLI: &str = "stride-cli";
}

/// Write-back data series metadata for the fatigue index stream
pub mod data_series {
    /// Display name of the fatigue index series
    pub const FATIGUE_SERIES_NAME: &str = "Neuromuscular Fatigue Index";
    /// Short code of the fatigue index series
    pub const FATIGUE_SERIES_SHORT_NAME: &str = "NFI";
    /// Units of the fatigue index series (dimensionless ratio)
    pub const FATIGUE_SERIES_UNITS: &str = "ratio";
    /// Chart color of the fatigue index series
    pub const FATIGUE_SERIES_COLOR: &str = "#e4572e";
}
