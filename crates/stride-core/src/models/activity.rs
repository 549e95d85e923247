// ABOUTME: Input records supplied by the data-acquisition layer
// ABOUTME: Activity velocity streams, training load pair, wellness HRV readings, and athlete metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActivityRecord {
    /// Provider activity identifier
    pub id: String,
    /// Session date, when known
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// 1 Hz velocity samples (m/s); absent when the provider has no stream
    #[serde(default)]
    pub velocity_stream: Option<Vec<f64>>,
    /// Peak speed recorded by the device (m/s)
    #[serde(default)]
    pub peak_velocity: f64,
}

impl ActivityRecord {
    /// Velocity samples, or an empty slice when the stream is missing
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        self.velocity_stream.as_deref().unwrap_or_default()
    }

    /// Number of velocity samples
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples().len()
    }

    /// Check that every sample and the peak speed are finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` naming the first offending value
    pub fn validate(&self) -> AppResult<()> {
        if !self.peak_velocity.is_finite() || self.peak_velocity < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Activity {}: peak velocity {} must be a finite non-negative speed",
                self.id, self.peak_velocity
            )));
        }
        if let Some((index, sample)) = self
            .samples()
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(AppError::invalid_input(format!(
                "Activity {}: velocity sample {index} ({sample}) \
                 must be a finite non-negative speed",
                self.id
            )));
        }
        Ok(())
    }
}

/// Accumulated fitness and fatigue figures (CTL/ATL)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TrainingLoad {
    /// Chronic training load
    pub fitness: f64,
    /// Acute training load
    pub fatigue: f64,
}

impl TrainingLoad {
    /// Create a load pair
    #[must_use]
    pub const fn new(fitness: f64, fatigue: f64) -> Self {
        Self { fitness, fatigue }
    }

    /// Fitness minus fatigue; positive means fresh
    #[must_use]
    pub fn training_stress_balance(&self) -> f64 {
        self.fitness - self.fatigue
    }

    /// Check both figures are finite
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if either figure is NaN or infinite
    pub fn validate(&self) -> AppResult<()> {
        if self.fitness.is_finite() && self.fatigue.is_finite() {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "Training load figures must be finite (fitness {}, fatigue {})",
                self.fitness, self.fatigue
            )))
        }
    }
}

/// A daily wellness entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WellnessRecord {
    /// Calendar date of the reading
    pub date: NaiveDate,
    /// Overnight HRV (ms), when recorded
    #[serde(default)]
    pub hrv: Option<f64>,
}

/// Athlete metadata
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AthleteProfile {
    /// Age in years
    pub age: u32,
    /// Body weight (kg), used for strength load estimates
    #[serde(default)]
    pub body_weight_kg: Option<f64>,
}

impl AthleteProfile {
    /// Check age is present and body weight, when given, is positive
    ///
    /// # Errors
    ///
    /// Returns `AppError::MissingRequiredField` for a zero age and
    /// `AppError::ValueOutOfRange` for a non-positive body weight
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 {
            return Err(AppError::missing_field("athlete.age"));
        }
        if let Some(weight) = self.body_weight_kg {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(AppError::out_of_range(format!(
                    "Body weight {weight} kg must be positive"
                )));
            }
        }
        Ok(())
    }
}
