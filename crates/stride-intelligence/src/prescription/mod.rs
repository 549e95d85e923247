// ABOUTME: Deterministic prescription rule tables driven by readiness and load scores
// ABOUTME: Strength zones, sprint workout selection, and multi-event race planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prescription Engine
//!
//! Each table is a match over an enumerated key returning a fully populated
//! record. None of them fail: every input maps to some branch.

/// Multi-event race planning
pub mod race_plan;
/// Sprint workout selection
pub mod sprint_workout;
/// Strength zone selection and load estimation
pub mod strength;

pub use race_plan::RacePlanner;
pub use sprint_workout::{SprintContext, SprintWorkoutSelector};
pub use strength::{estimate_weight_kg, StrengthPrescriber};
