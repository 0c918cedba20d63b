//! Shared nutrition data structure
//!
//! Used for recipe totals and per-serving values.

use serde::Serialize;

use crate::models::{Ingredient, NutrientField};
use crate::nutrition::{
    aggregate_nutrient, format_trimmed, macro_percentages, per_serving, CalcError,
    MacroPercentages, NUTRITION_DECIMALS,
};

/// Calorie and macro totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl Nutrition {
    /// Sum every macro over the given rows
    ///
    /// With `Some(ratio)` each contribution is scaled to the desired portions;
    /// `None` reports the recipe as written.
    pub fn from_ingredients<'a, I>(ingredients: I, scale_ratio: Option<f64>) -> Self
    where
        I: IntoIterator<Item = &'a Ingredient> + Clone,
    {
        let apply_scale = scale_ratio.is_some();
        let ratio = scale_ratio.unwrap_or(1.0);
        let total = |field| aggregate_nutrient(ingredients.clone(), field, apply_scale, ratio);

        Self {
            calories: total(NutrientField::Calories),
            protein: total(NutrientField::Protein),
            carbs: total(NutrientField::Carbs),
            fat: total(NutrientField::Fat),
        }
    }

    /// Divide every value across `portions` servings
    pub fn per_serving(&self, portions: f64) -> Result<Self, CalcError> {
        Ok(Self {
            calories: per_serving(self.calories, portions)?,
            protein: per_serving(self.protein, portions)?,
            carbs: per_serving(self.carbs, portions)?,
            fat: per_serving(self.fat, portions)?,
        })
    }

    /// Atwater breakdown against the recorded calorie total
    pub fn macro_percentages(&self) -> Option<MacroPercentages> {
        macro_percentages(self.protein, self.carbs, self.fat, self.calories)
    }

    /// Display form: every value with at most one decimal
    pub fn display(&self) -> NutritionDisplay {
        NutritionDisplay {
            calories: format_trimmed(self.calories, NUTRITION_DECIMALS),
            protein: format_trimmed(self.protein, NUTRITION_DECIMALS),
            carbs: format_trimmed(self.carbs, NUTRITION_DECIMALS),
            fat: format_trimmed(self.fat, NUTRITION_DECIMALS),
        }
    }
}

/// Nutrition values as they are shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionDisplay {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}
