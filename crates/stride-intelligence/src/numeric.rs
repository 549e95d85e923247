// ABOUTME: Small numeric helpers shared by the scoring modules
// ABOUTME: Decimal rounding and empty-safe arithmetic means
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Arithmetic mean, or `None` for an empty iterator
pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    #[allow(clippy::cast_precision_loss)]
    (count > 0).then(|| sum / count as f64)
}
