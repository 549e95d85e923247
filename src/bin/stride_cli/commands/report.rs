// ABOUTME: Full athlete report command for stride-cli
// ABOUTME: Loads a snapshot file and prints the complete scoring report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::output::print_json;
use anyhow::Result;
use std::path::Path;
use stride::config::AnalysisConfig;
use stride::snapshot::report_from_file;
use tracing::info;

/// Build and print the report for a snapshot file
pub fn run(input: &Path, config: &AnalysisConfig, pretty: bool) -> Result<()> {
    let report = report_from_file(input, config)?;
    info!(
        input = %input.display(),
        predictions = report.predictions.len(),
        race_plans = report.race_plans.len(),
        "Report complete"
    );
    print_json(&report, pretty)
}
