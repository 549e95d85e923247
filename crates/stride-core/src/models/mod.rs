// ABOUTME: Core data models for sprint telemetry, readiness scoring, and prescriptions
// ABOUTME: Re-exports interval, profile, readiness, race, prescription, and input record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All models are plain, serializable values. Outputs are computed fresh on every
//! call and never persisted by the core.
//!
//! ## Core Models
//!
//! - `TrackInterval`: a classified effort burst cut from a 1 Hz velocity stream
//! - `TrainingProfile`: capability summary aggregated from many intervals
//! - `ReadinessState`: fatigue index, status band, recovery score and window
//! - `RacePrediction`: predicted time and phase breakdown for one distance
//! - `StrengthPrescription`, `SprintWorkout`, `RacePlan`: rule-table outputs
//! - `ActivityRecord`, `TrainingLoad`, `WellnessRecord`, `AthleteProfile`: inputs

// Domain modules
mod activity;
mod data_series;
mod interval;
mod prescription;
mod profile;
mod race;
mod readiness;

// Input records
pub use activity::{ActivityRecord, AthleteProfile, TrainingLoad, WellnessRecord};

// Write-back payload
pub use data_series::DataSeries;

// Interval domain
pub use interval::{IntervalClass, TrackInterval};
pub use profile::TrainingProfile;

// Readiness domain
pub use readiness::{HrvSignal, ReadinessState, SmartRecoveryWindow, StatusBand};

// Race domain
pub use race::{ConfidenceBand, PhaseBreakdown, RaceDistance, RacePrediction};

// Prescription domain
pub use prescription::{
    Exercise, Intensity, MainSetBlock, PlanRole, RaceEvent, RacePlan, SprintWorkout,
    StrengthPrescription, StrengthZone, TrainingPhase, WorkoutKind,
};
