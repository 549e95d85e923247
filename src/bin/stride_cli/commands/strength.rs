// ABOUTME: Strength prescription command for stride-cli
// ABOUTME: Selects the strength zone from TSB and estimates loads from body weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::output::print_json;
use anyhow::{bail, Result};
use stride::intelligence::prescription::StrengthPrescriber;

/// Print the strength prescription for a training stress balance
pub fn run(tsb: f64, body_weight_kg: Option<f64>, pretty: bool) -> Result<()> {
    if let Some(weight) = body_weight_kg {
        if !weight.is_finite() || weight <= 0.0 {
            bail!("Body weight must be a positive number of kilograms, got {weight}");
        }
    }
    print_json(&StrengthPrescriber::prescribe(tsb, body_weight_kg), pretty)
}
