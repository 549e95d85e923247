// ABOUTME: Named data series payload handed to the remote write-back collaborator
// ABOUTME: Serialized with camelCase keys to match the remote stream schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One value per original velocity sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataSeries {
    /// Display name
    pub name: String,
    /// Short code
    pub short_name: String,
    /// Units label
    pub units: String,
    /// Values aligned with the velocity samples
    pub values: Vec<f64>,
    /// Chart color
    pub color: String,
}
