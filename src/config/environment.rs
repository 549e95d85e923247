// ABOUTME: Environment-based application configuration for the Stride library and CLI
// ABOUTME: Combines analysis thresholds and logging settings loaded from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration. There are no config files: every setting has a
//! constant default and an optional environment override.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use stride_core::errors::AppResult;
use stride_intelligence::AnalysisConfig;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Complete Stride configuration
#[derive(Debug, Clone, Default)]
pub struct StrideConfig {
    /// Deployment environment (`ENVIRONMENT`)
    pub environment: Environment,
    /// Interval parsing and baseline settings
    pub analysis: AnalysisConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl StrideConfig {
    /// Load configuration from environment variables
    ///
    /// Unparseable analysis values fall back to their defaults with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = Self::environment_from_env();
        Self {
            environment,
            analysis: AnalysisConfig::from_env(),
            logging: LoggingConfig::from_env(),
        }
    }

    /// Load configuration from environment variables, rejecting invalid values
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an analysis variable is set but cannot be
    /// parsed, or if the resulting thresholds fail validation
    pub fn try_from_env() -> AppResult<Self> {
        let config = Self {
            environment: Self::environment_from_env(),
            analysis: AnalysisConfig::try_from_env()?,
            logging: LoggingConfig::from_env(),
        };
        info!(
            environment = %config.environment,
            moving_threshold_mps = config.analysis.moving_threshold_mps,
            min_rep_distance_m = config.analysis.min_rep_distance_m,
            baseline_window = config.analysis.baseline_window,
            hrv_window_days = config.analysis.hrv_window_days,
            "Loaded configuration from environment"
        );
        Ok(config)
    }

    fn environment_from_env() -> Environment {
        env::var("ENVIRONMENT").map_or(Environment::default(), |value| {
            Environment::from_str_or_default(&value)
        })
    }
}
