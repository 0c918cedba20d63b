//! Portion scale control
//!
//! Portion counts are integers; whatever the user types is coerced and
//! clamped instead of rejected, and the clamped value is what gets stored.

use serde::Serialize;

use super::numeric::parse_numeric;

/// Smallest portion count either control accepts
pub const MIN_PORTIONS: u32 = 1;
/// Largest desired portion count
pub const MAX_DESIRED_PORTIONS: u32 = 20;
/// Portion count a fresh recipe starts with, for both controls
pub const DEFAULT_PORTIONS: u32 = 4;

/// Coerce portion text to a whole number, truncating any fraction
///
/// Non-numeric text yields `None`; values beyond `u32` saturate.
fn coerce_whole(text: &str) -> Option<i64> {
    let value = parse_numeric(text)?.trunc();
    // `as` saturates for floats out of i64 range
    Some(value as i64)
}

/// Clamp an original-portions entry: at least 1, no upper bound
pub fn clamp_original_portions(text: &str) -> u32 {
    match coerce_whole(text) {
        Some(n) if n >= MIN_PORTIONS as i64 => n.min(u32::MAX as i64) as u32,
        _ => MIN_PORTIONS,
    }
}

/// Clamp a desired-portions entry to 1..=20
pub fn clamp_desired_portions(text: &str) -> u32 {
    match coerce_whole(text) {
        Some(n) => n.clamp(MIN_PORTIONS as i64, MAX_DESIRED_PORTIONS as i64) as u32,
        None => MIN_PORTIONS,
    }
}

/// Original and desired serving counts of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecipeScale {
    original_portions: u32,
    desired_portions: u32,
}

impl RecipeScale {
    /// Build a scale from already-numeric counts, clamping both
    pub fn new(original_portions: u32, desired_portions: u32) -> Self {
        Self {
            original_portions: original_portions.max(MIN_PORTIONS),
            desired_portions: desired_portions.clamp(MIN_PORTIONS, MAX_DESIRED_PORTIONS),
        }
    }

    pub fn original_portions(&self) -> u32 {
        self.original_portions
    }

    pub fn desired_portions(&self) -> u32 {
        self.desired_portions
    }

    /// Store a user-entered original count and return the effective value
    pub fn set_original_text(&mut self, text: &str) -> u32 {
        self.original_portions = clamp_original_portions(text);
        self.original_portions
    }

    /// Store a user-entered desired count and return the effective value
    pub fn set_desired_text(&mut self, text: &str) -> u32 {
        self.desired_portions = clamp_desired_portions(text);
        self.desired_portions
    }

    /// desired / original
    pub fn ratio(&self) -> f64 {
        self.desired_portions as f64 / self.original_portions as f64
    }
}

impl Default for RecipeScale {
    fn default() -> Self {
        Self::new(DEFAULT_PORTIONS, DEFAULT_PORTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_portions_clamp_low_and_junk_to_one() {
        assert_eq!(clamp_original_portions("0"), 1);
        assert_eq!(clamp_original_portions("-3"), 1);
        assert_eq!(clamp_original_portions("abc"), 1);
        assert_eq!(clamp_original_portions(""), 1);
    }

    #[test]
    fn test_original_portions_have_no_upper_bound() {
        assert_eq!(clamp_original_portions("250"), 250);
        assert_eq!(clamp_original_portions("1e12"), u32::MAX);
    }

    #[test]
    fn test_portions_truncate_fractions() {
        assert_eq!(clamp_original_portions("2.7"), 2);
        assert_eq!(clamp_desired_portions("5.9"), 5);
        assert_eq!(clamp_desired_portions("0.5"), 1);
    }

    #[test]
    fn test_desired_portions_clamp_to_range() {
        assert_eq!(clamp_desired_portions("0"), 1);
        assert_eq!(clamp_desired_portions("-1"), 1);
        assert_eq!(clamp_desired_portions("xyz"), 1);
        assert_eq!(clamp_desired_portions("25"), 20);
        assert_eq!(clamp_desired_portions("20"), 20);
        assert_eq!(clamp_desired_portions("5"), 5);
    }

    #[test]
    fn test_scale_defaults_and_ratio() {
        let mut scale = RecipeScale::default();
        assert_eq!(scale.original_portions(), 4);
        assert_eq!(scale.desired_portions(), 4);
        assert!((scale.ratio() - 1.0).abs() < 1e-12);

        assert_eq!(scale.set_desired_text("8"), 8);
        assert!((scale.ratio() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_reflects_clamped_value() {
        let mut scale = RecipeScale::default();
        assert_eq!(scale.set_desired_text("25"), 20);
        assert_eq!(scale.desired_portions(), 20);
        assert_eq!(scale.set_original_text("0"), 1);
        assert_eq!(scale.original_portions(), 1);
    }

    #[test]
    fn test_new_clamps_numeric_counts() {
        let scale = RecipeScale::new(0, 99);
        assert_eq!(scale.original_portions(), 1);
        assert_eq!(scale.desired_portions(), 20);
    }
}
