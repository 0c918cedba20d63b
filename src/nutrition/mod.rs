//! Nutrition calculation module
//!
//! Portion scaling, nutrition aggregation and the numeric text rules they share.

pub mod calculator;
pub mod numeric;
pub mod portions;

pub use calculator::{
    aggregate_nutrient, macro_percentages, per_serving, scale_quantity, CalcError,
    MacroPercentages, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
    STANDARD_SERVING_BASIS,
};
pub use numeric::{format_trimmed, parse_numeric, round_to, NUTRITION_DECIMALS, QUANTITY_DECIMALS};
pub use portions::{
    clamp_desired_portions, clamp_original_portions, RecipeScale, DEFAULT_PORTIONS,
    MAX_DESIRED_PORTIONS, MIN_PORTIONS,
};
