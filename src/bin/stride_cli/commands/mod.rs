// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for stride-cli
// ABOUTME: Provides report, interval, readiness, and strength commands

pub mod intervals;
pub mod readiness;
pub mod report;
pub mod strength;
