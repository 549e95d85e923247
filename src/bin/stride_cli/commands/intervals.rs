// ABOUTME: Interval segmentation command for stride-cli
// ABOUTME: Parses a JSON velocity stream file and prints classified intervals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::output::print_json;
use anyhow::Result;
use std::path::Path;
use stride::config::AnalysisConfig;
use stride::intelligence::IntervalParser;
use stride::snapshot::load_velocity_stream;

/// Parse a velocity stream file and print its intervals
pub fn run(input: &Path, config: &AnalysisConfig, pretty: bool) -> Result<()> {
    config.validate()?;
    let samples = load_velocity_stream(input)?;
    let intervals = IntervalParser::from_config(config).parse(&samples);
    print_json(&intervals, pretty)
}
