//! Numeric text helpers
//!
//! Every number the user types is kept as text and only parsed when a value
//! is needed, so a field can hold half-typed input without breaking anything.

/// Fractional digits shown for adjusted ingredient quantities
pub const QUANTITY_DECIMALS: usize = 2;

/// Fractional digits shown for nutrition totals and per-serving values
pub const NUTRITION_DECIMALS: usize = 1;

/// Parse numeric text, treating anything that isn't a finite number as absent
///
/// Examples:
/// - "100" -> Some(100.0)
/// - " 2.5 " -> Some(2.5)
/// - ".5" -> Some(0.5)
/// - "" / "abc" / "inf" -> None
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    // f64::from_str accepts "inf" and "NaN", neither of which is a quantity.
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format with at most `decimals` fractional digits, never padding with zeros
///
/// Examples:
/// - (200.0, 2) -> "200"
/// - (1.5, 2) -> "1.5"
/// - (41.25, 1) -> "41.3"
/// - (0.333, 2) -> "0.33"
pub fn format_trimmed(value: f64, decimals: usize) -> String {
    let rounded = round_to(value, decimals);
    let mut text = format!("{:.*}", decimals, rounded);

    if text.contains('.') {
        let keep = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(keep);
    }

    if text == "-0" {
        text = "0".to_string();
    }
    text
}
