// ABOUTME: Prescription outputs for strength sessions, sprint workouts, and multi-race plans
// ABOUTME: Plain fully-populated records returned by the deterministic rule tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::StatusBand;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength zone selected from training stress balance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StrengthZone {
    /// TSB at or above zero
    Fresh,
    /// TSB from -20 up to zero
    Tired,
    /// TSB below -20
    Fatigued,
}

/// Lifting intensity for a strength zone
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Heavy, low-rep loading
    High,
    /// Sub-maximal loading
    Moderate,
    /// No loaded lifting
    None,
}

/// A named exercise, optionally loaded relative to body weight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Sets x reps descriptor
    pub prescription: String,
    /// Working load as a multiple of body weight; `None` for unloaded work
    pub body_weight_multiplier: Option<f64>,
    /// Estimated working load (kg) when a body weight was supplied
    pub estimated_load_kg: Option<u32>,
}

/// Strength session for the current zone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrengthPrescription {
    /// Selected zone
    pub zone: StrengthZone,
    /// Lifting intensity
    pub intensity: Intensity,
    /// What the session is for
    pub focus: String,
    /// Exercise list
    pub exercises: Vec<Exercise>,
}

/// Which branch of the sprint workout table was taken
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Full max-velocity session
    MaxVelocity,
    /// Technical/drill session without maximal efforts
    Technical,
    /// Recovery only, no sprinting
    Recovery,
    /// Progressive accelerations and flying runs for a stale athlete
    Reactivation,
}

/// One block of the main set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MainSetBlock {
    /// Block name
    pub name: String,
    /// Number of repetitions
    pub repetitions: u32,
    /// Distance descriptor (e.g. "30m")
    pub distance: String,
    /// Rest descriptor
    pub rest: String,
    /// Intensity descriptor
    pub intensity: String,
    /// Coaching cue
    pub cue: String,
}

/// Sprint session selected from readiness
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SprintWorkout {
    /// Status band the workout was selected for
    pub status: StatusBand,
    /// Selected branch
    pub kind: WorkoutKind,
    /// Session name
    pub name: String,
    /// Why this session was chosen
    pub rationale: String,
    /// Warmup items
    pub warmup: Vec<String>,
    /// Main set blocks
    pub main_set: Vec<MainSetBlock>,
    /// Cooldown items
    pub cooldown: Vec<String>,
    /// Sprint volume in meters across the main set
    pub sprint_volume_meters: u32,
    /// Total volume descriptor
    pub total_volume: String,
}

/// Periodization phase of a race plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhase {
    /// More than 28 days out
    Build,
    /// 15-28 days out
    Sharpen,
    /// 8-14 days out
    RaceSpecific,
    /// 4-7 days out
    FinalTaper,
    /// 0-3 days out
    RacePrep,
    /// Secondary event waiting on an imminent primary race
    Deferred,
}

impl TrainingPhase {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Build => "Build",
            Self::Sharpen => "Sharpen",
            Self::RaceSpecific => "Race-Specific",
            Self::FinalTaper => "Final Taper",
            Self::RacePrep => "Race Prep",
            Self::Deferred => "Deferred",
        }
    }
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scheduled competition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaceEvent {
    /// Event name
    pub name: String,
    /// Race distance (m)
    pub distance_meters: u32,
    /// Days until the event
    pub days_until: u32,
}

/// Whether a plan drives training or is subordinate to a nearer event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanRole {
    /// The nearest event; unconstrained master plan
    Primary,
    /// Any later event
    Secondary,
}

/// Plan for one event in a multi-race schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RacePlan {
    /// The event planned for
    pub event: RaceEvent,
    /// Primary or secondary
    pub role: PlanRole,
    /// Phase in effect today
    pub current_phase: TrainingPhase,
    /// Forward plan once recovered from the primary race (deferred events only)
    pub post_recovery_phase: Option<TrainingPhase>,
    /// Training days left after the primary race and its recovery (secondary events only)
    pub effective_training_days: Option<u32>,
    /// Simple distance-only predicted time (s); `None` without a peak velocity
    pub predicted_seconds: Option<f64>,
    /// What training should emphasize now
    pub focus: String,
    /// Scheduling caveats
    pub notes: Vec<String>,
}
