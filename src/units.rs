//! Duration unit conversions and display formatting.
//!
//! The backend reports lap and session durations in ten-thousandths of a
//! second (`average_lap` and friends). This module converts between that
//! unit and wall-clock quantities, and provides the display formatters
//! shared by the chart legends and tooltips.

/// Ticks per second in backend duration fields.
pub const TICKS_PER_SECOND: i64 = 10_000;

/// Convert a backend duration to hours.
pub fn to_hours(interval: i64) -> f64 {
    interval as f64 / TICKS_PER_SECOND as f64 / 60.0 / 60.0
}

/// Convert minutes to a backend duration.
pub fn from_minutes(minutes: f64) -> i64 {
    (minutes * 60.0 * TICKS_PER_SECOND as f64) as i64
}

/// Convert hours to a backend duration.
pub fn from_hours(hours: f64) -> i64 {
    from_minutes(hours * 60.0)
}

/// Round a value to the given number of decimal digits.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let multiplier = 10f64.powi(digits as i32);
    (value * multiplier).round() / multiplier
}

/// Format a backend duration as a compact human-readable string:
/// `"3h 25m"` above an hour, `"25m"` above a minute, `"40s"` below.
pub fn format_duration(interval: i64) -> String {
    let total_seconds = interval / TICKS_PER_SECOND;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", seconds)
    }
}

/// `format_duration` over the `f64` values chart scenes carry.
pub fn format_duration_f64(interval: f64) -> String {
    format_duration(interval as i64)
}

/// Format a duration already expressed in hours, e.g. `"12.5h"`.
pub fn format_hours(hours: f64) -> String {
    format!("{}h", round_to(hours, 1))
}

/// Format a corners-per-incident value. Zero incidents yields an infinite
/// CPI, displayed as `"∞"` rather than leaking `inf` into the UI.
pub fn format_cpi(cpi: f64) -> String {
    if cpi.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.1}", cpi)
    }
}
