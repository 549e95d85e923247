// ABOUTME: Stride CLI - command-line front end for the sprint scoring pipeline
// ABOUTME: Runs full reports, interval parsing, readiness scoring, and strength prescriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full report for an athlete snapshot
//! stride-cli report --input snapshot.json --pretty
//!
//! # Classified intervals for a JSON array of 1 Hz velocities
//! stride-cli intervals --input stream.json
//!
//! # Readiness from raw figures
//! stride-cli readiness --current-peak 9.1 --baseline-peak 9.5 --tsb -4 --hrv 62 --hrv-avg 65 --age 34
//!
//! # Strength session for the current load
//! stride-cli strength --tsb -12 --body-weight 78
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::readiness::ReadinessArgs;
use std::path::PathBuf;
use stride::config::StrideConfig;
use stride::constants::service_names;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "stride-cli",
    about = "Stride sprint intelligence CLI",
    long_about = "Parse sprint velocity telemetry, score readiness, \
                  predict race times, and prescribe training."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Build the full athlete report from a snapshot file
    Report {
        /// Snapshot JSON file
        #[arg(long, short = 'i')]
        input: PathBuf,
    },

    /// Segment a velocity stream into classified intervals
    Intervals {
        /// JSON file holding an array of velocities (m/s)
        #[arg(long, short = 'i')]
        input: PathBuf,
    },

    /// Score readiness and select today's sprint workout
    Readiness {
        /// Today's peak velocity (m/s)
        #[arg(long)]
        current_peak: f64,

        /// Rolling baseline peak velocity (m/s)
        #[arg(long)]
        baseline_peak: f64,

        /// Training stress balance (fitness - fatigue)
        #[arg(long, allow_negative_numbers = true)]
        tsb: f64,

        /// Current HRV (ms)
        #[arg(long)]
        hrv: f64,

        /// 7-day average HRV (ms)
        #[arg(long)]
        hrv_avg: f64,

        /// Athlete age in years
        #[arg(long)]
        age: u32,
    },

    /// Prescribe a strength session from training stress balance
    Strength {
        /// Training stress balance (fitness - fatigue)
        #[arg(long, allow_negative_numbers = true)]
        tsb: f64,

        /// Body weight (kg) for load estimates
        #[arg(long)]
        body_weight: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let StrideConfig {
        analysis, logging, ..
    } = StrideConfig::try_from_env()?;

    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;
    debug!(service = service_names::STRIDE_CLI, "Command line parsed");

    match cli.command {
        Command::Report { input } => commands::report::run(&input, &analysis, cli.pretty),
        Command::Intervals { input } => {
            commands::intervals::run(&input, &analysis, cli.pretty)
        }
        Command::Readiness {
            current_peak,
            baseline_peak,
            tsb,
            hrv,
            hrv_avg,
            age,
        } => commands::readiness::run(
            &ReadinessArgs {
                current_peak,
                baseline_peak,
                tsb,
                hrv,
                hrv_avg,
                age,
            },
            cli.pretty,
        ),
        Command::Strength { tsb, body_weight } => {
            commands::strength::run(tsb, body_weight, cli.pretty)
        }
    }
}
