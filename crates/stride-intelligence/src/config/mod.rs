// ABOUTME: Analysis configuration for interval segmentation and baseline windows
// ABOUTME: Environment-only loading with constant defaults and explicit validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis Configuration
//!
//! Settings are read from the environment only. Every field defaults to the
//! fixed constants in `stride_core::constants`, so an empty environment yields
//! exactly the reference behavior.
//!
//! | Variable                       | Field                  |
//! |--------------------------------|------------------------|
//! | `STRIDE_MOVING_THRESHOLD_MPS`  | `moving_threshold_mps` |
//! | `STRIDE_MIN_REP_DISTANCE_M`    | `min_rep_distance_m`   |
//! | `STRIDE_BASELINE_WINDOW`       | `baseline_window`      |
//! | `STRIDE_HRV_WINDOW_DAYS`       | `hrv_window_days`      |

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use stride_core::constants::intervals::{MIN_REP_DISTANCE_M, MOVING_THRESHOLD_MPS};
use stride_core::constants::readiness::{DEFAULT_BASELINE_WINDOW, DEFAULT_HRV_WINDOW_DAYS};
use tracing::warn;

/// Environment variable for the moving threshold
pub const ENV_MOVING_THRESHOLD: &str = "STRIDE_MOVING_THRESHOLD_MPS";
/// Environment variable for the minimum rep distance
pub const ENV_MIN_REP_DISTANCE: &str = "STRIDE_MIN_REP_DISTANCE_M";
/// Environment variable for the peak baseline window
pub const ENV_BASELINE_WINDOW: &str = "STRIDE_BASELINE_WINDOW";
/// Environment variable for the HRV averaging window
pub const ENV_HRV_WINDOW_DAYS: &str = "STRIDE_HRV_WINDOW_DAYS";

/// Tunable inputs to the pipeline that sit outside the fixed scoring constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Samples at or above this speed (m/s) belong to a burst
    pub moving_threshold_mps: f64,
    /// Bursts shorter than this (m) are discarded
    pub min_rep_distance_m: f64,
    /// Historical peaks averaged into the fatigue baseline
    pub baseline_window: usize,
    /// Days of HRV readings averaged into the HRV baseline
    pub hrv_window_days: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            moving_threshold_mps: MOVING_THRESHOLD_MPS,
            min_rep_distance_m: MIN_REP_DISTANCE_M,
            baseline_window: DEFAULT_BASELINE_WINDOW,
            hrv_window_days: DEFAULT_HRV_WINDOW_DAYS,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from environment, falling back to defaults on unparseable values
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            moving_threshold_mps: env_or_default(
                ENV_MOVING_THRESHOLD,
                defaults.moving_threshold_mps,
            ),
            min_rep_distance_m: env_or_default(ENV_MIN_REP_DISTANCE, defaults.min_rep_distance_m),
            baseline_window: env_or_default(ENV_BASELINE_WINDOW, defaults.baseline_window),
            hrv_window_days: env_or_default(ENV_HRV_WINDOW_DAYS, defaults.hrv_window_days),
        }
    }

    /// Load configuration from environment, rejecting unparseable or invalid values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a variable is set but cannot be parsed, or the
    /// error from [`AnalysisConfig::validate`] if the resulting values are out of range
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            moving_threshold_mps: env_strict(ENV_MOVING_THRESHOLD, defaults.moving_threshold_mps)?,
            min_rep_distance_m: env_strict(ENV_MIN_REP_DISTANCE, defaults.min_rep_distance_m)?,
            baseline_window: env_strict(ENV_BASELINE_WINDOW, defaults.baseline_window)?,
            hrv_window_days: env_strict(ENV_HRV_WINDOW_DAYS, defaults.hrv_window_days)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any threshold or window is outside its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.moving_threshold_mps.is_finite() || self.moving_threshold_mps <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "moving_threshold_mps must be a positive speed",
            ));
        }
        if !self.min_rep_distance_m.is_finite() || self.min_rep_distance_m < 1.0 {
            return Err(ConfigError::InvalidRange(
                "min_rep_distance_m must be at least 1 meter",
            ));
        }
        if self.baseline_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "baseline_window must include at least one session",
            ));
        }
        if self.hrv_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "hrv_window_days must include at least one day",
            ));
        }
        Ok(())
    }
}

fn env_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!(
                variable = key,
                value = %raw,
                error = %e,
                "Unparseable config value, using default"
            );
            default
        }),
        Err(_) => default,
    }
}

fn env_strict<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ConfigError::Parse(format!("{key}={raw}: {e}"))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
