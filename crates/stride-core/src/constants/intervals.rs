// ABOUTME: Interval segmentation constants for 1 Hz velocity streams
// ABOUTME: Moving threshold, minimum rep distance, flying window, and distance band edges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Samples at or above this speed (m/s) belong to a burst
pub const MOVING_THRESHOLD_MPS: f64 = 1.0;

/// Bursts covering less than this distance (m) are noise, not reps
pub const MIN_REP_DISTANCE_M: f64 = 10.0;

/// Sliding window (samples) for flying velocity
pub const FLYING_WINDOW_SAMPLES: usize = 3;

/// Upper edge (inclusive, m) of the Acceleration band
pub const ACCELERATION_MAX_M: u32 = 40;

/// Upper edge (inclusive, m) of the Max Velocity band
pub const MAX_VELOCITY_MAX_M: u32 = 80;

/// Upper edge (inclusive, m) of the Speed Endurance band; anything longer is Special Endurance
pub const SPEED_ENDURANCE_MAX_M: u32 = 150;
