// ABOUTME: Core types and constants for the Stride sprint readiness platform
// ABOUTME: Foundation crate with error handling, domain constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for the Stride sprint
//! telemetry platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Fixed thresholds and coefficients organized by domain
//! - **models**: Telemetry inputs, classified intervals, readiness and prescription records

/// Unified error handling system with standard error codes
pub mod errors;

/// Fixed thresholds and model coefficients organized by domain
pub mod constants;

/// Core data models (intervals, profiles, readiness, predictions, prescriptions)
pub mod models;
