// ABOUTME: Prescription rule-table boundaries for strength zones and race planning
// ABOUTME: TSB zone edges, phase windows in days, and post-race recovery days by distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// TSB at or above this selects the fresh strength zone
pub const FRESH_TSB_MIN: f64 = 0.0;

/// TSB at or above this (and below fresh) selects the tired zone
pub const TIRED_TSB_MIN: f64 = -20.0;

/// Days out at or under which an event is in Race Prep
pub const RACE_PREP_MAX_DAYS: u32 = 3;
/// Days out at or under which an event is in Final Taper
pub const FINAL_TAPER_MAX_DAYS: u32 = 7;
/// Days out at or under which an event is Race-Specific
pub const RACE_SPECIFIC_MAX_DAYS: u32 = 14;
/// Days out at or under which an event is in Sharpen
pub const SHARPEN_MAX_DAYS: u32 = 28;

/// Post-race recovery days after a 100m
pub const RECOVERY_DAYS_100: u32 = 4;
/// Post-race recovery days after a 200m
pub const RECOVERY_DAYS_200: u32 = 5;
/// Post-race recovery days after a 400m
pub const RECOVERY_DAYS_400: u32 = 7;
/// Post-race recovery days after any other distance
pub const RECOVERY_DAYS_OTHER: u32 = 9;
