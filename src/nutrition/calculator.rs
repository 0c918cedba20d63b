//! Portion calculator
//!
//! Pure functions behind every number the recipe view shows: scaled
//! quantities, nutrition totals, per-serving values and macro breakdowns.
//! None of them fail on bad input; text that isn't a number is simply absent.

use serde::Serialize;
use thiserror::Error;

use super::numeric::{format_trimmed, parse_numeric, QUANTITY_DECIMALS};
use crate::models::{Ingredient, NutrientField};

/// Quantity that stored macro values refer to
pub const STANDARD_SERVING_BASIS: f64 = 100.0;

// ============================================================================
// Atwater factors (kcal per gram)
// ============================================================================

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Calculator error types
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("Portion count must be greater than 0, got {0}")]
    NonPositivePortions(f64),
}

/// Scale an ingredient quantity by desired/original portions
///
/// Examples:
/// - ("100", 2.0) -> "200"
/// - ("1.5", 0.5) -> "0.75"
/// - ("1", 1.0 / 3.0) -> "0.33"
/// - ("", r) -> ""
/// - ("a pinch", r) -> "a pinch"
pub fn scale_quantity(quantity_text: &str, scale_ratio: f64) -> String {
    if quantity_text.is_empty() {
        return String::new();
    }

    match parse_numeric(quantity_text).map(|quantity| quantity * scale_ratio) {
        // An overflowing product reads like unparseable input.
        Some(scaled) if scaled.is_finite() => format_trimmed(scaled, QUANTITY_DECIMALS),
        _ => quantity_text.to_string(),
    }
}

/// Total one macro over a list of ingredients
///
/// Each row contributes `value * quantity / 100`, times `scale_ratio` when
/// `apply_scale` is set. Rows missing either number contribute nothing.
pub fn aggregate_nutrient<'a, I>(
    ingredients: I,
    field: NutrientField,
    apply_scale: bool,
    scale_ratio: f64,
) -> f64
where
    I: IntoIterator<Item = &'a Ingredient>,
{
    let multiplier = if apply_scale { scale_ratio } else { 1.0 };

    ingredients
        .into_iter()
        .map(|ingredient| {
            let value = parse_numeric(ingredient.nutrient_text(field));
            let quantity = parse_numeric(&ingredient.quantity);
            match (value, quantity) {
                (Some(value), Some(quantity)) => {
                    value * quantity / STANDARD_SERVING_BASIS * multiplier
                }
                _ => 0.0,
            }
        })
        .sum()
}

/// Divide a total across servings
pub fn per_serving(total: f64, portions: f64) -> Result<f64, CalcError> {
    // `!(x > 0)` also catches NaN
    if !(portions > 0.0) {
        return Err(CalcError::NonPositivePortions(portions));
    }
    Ok(total / portions)
}

/// Share of recorded calories coming from each macro, in whole percent
///
/// The three shares are computed independently and are not forced to sum
/// to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroPercentages {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// Atwater macro breakdown; `None` when there are no calories to divide by
pub fn macro_percentages(
    protein_total: f64,
    carbs_total: f64,
    fat_total: f64,
    calorie_total: f64,
) -> Option<MacroPercentages> {
    if !(calorie_total > 0.0) {
        return None;
    }

    let share = |grams: f64, kcal_per_gram: f64| {
        (grams * kcal_per_gram / calorie_total * 100.0).round() as i64
    };

    Some(MacroPercentages {
        protein: share(protein_total, KCAL_PER_G_PROTEIN),
        carbs: share(carbs_total, KCAL_PER_G_CARBS),
        fat: share(fat_total, KCAL_PER_G_FAT),
    })
}
