// ABOUTME: Best-effort distance canonicalization for display
// ABOUTME: Renders sub-kilometer values in meters and kilometers with minimal decimals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

//! Distance display canonicalization.
//!
//! Formatting is best-effort and never destructive: anything that is not a
//! recognizable `"<number>km"` token passes through unchanged.

/// Canonicalize a distance value for display.
///
/// Recognized kilometer values render as meters below 1 km, whole
/// kilometers without decimals, and fractional kilometers with exactly one
/// decimal. Rounding is half-away-from-zero at the chosen precision.
///
/// # Examples
///
/// ```rust
/// use planilha_core::format::format_distance;
///
/// assert_eq!(format_distance("0.5km"), "500m");
/// assert_eq!(format_distance("1km"), "1km");
/// assert_eq!(format_distance("1.5km"), "1.5km");
/// assert_eq!(format_distance("10"), "10");
/// ```
#[must_use]
pub fn format_distance(value: &str) -> String {
    let Some(km) = parse_kilometers(value) else {
        return value.to_owned();
    };

    if km < 1.0 {
        let meters = (km * 1000.0).round();
        return format!("{meters:.0}m");
    }
    if km.fract() == 0.0 {
        return format!("{km:.0}km");
    }
    // f64::round ties away from zero, unlike the formatter's banker's
    // rounding, so round to tenths before printing.
    let tenths = (km * 10.0).round() / 10.0;
    format!("{tenths:.1}km")
}

/// Parse a `"<number>km"` token into its magnitude.
fn parse_kilometers(value: &str) -> Option<f64> {
    let magnitude = value.trim().strip_suffix("km")?.trim_end();
    if magnitude.is_empty() {
        return None;
    }
    magnitude.parse::<f64>().ok().filter(|km| km.is_finite())
}
