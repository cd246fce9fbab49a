//! Shared helper functions for CLI commands
//!
//! Number formatting lives here so every renderer rounds the same way.

use crate::entities::stackup::UNITS;

/// Format a value with a fixed number of decimal places
///
/// Negative zero is printed as zero so a chain that nets out reads "0.00"
/// rather than "-0.00".
pub fn format_fixed(value: f64, places: usize) -> String {
    let text = format!("{:.*}", places, value);
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

/// Format a length with its unit, e.g. `45.00 mm`
pub fn format_length(value: f64, places: usize) -> String {
    format!("{} {}", format_fixed(value, places), UNITS)
}

/// Format a symmetric bound with its unit, e.g. `±0.35 mm`
pub fn format_bound(value: f64, places: usize) -> String {
    format!("±{} {}", format_fixed(value, places), UNITS)
}
