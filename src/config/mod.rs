// ABOUTME: Configuration module for Stride analysis and logging settings
// ABOUTME: Re-exports the environment loader and the analysis thresholds it wraps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-driven application configuration
pub mod environment;

pub use environment::{Environment, StrideConfig};
pub use stride_intelligence::config::{AnalysisConfig, ConfigError};
