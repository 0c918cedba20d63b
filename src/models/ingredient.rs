//! Ingredient row model
//!
//! One row of recipe input. Every numeric field stays text so that a row can
//! sit half-edited without invalidating the rest of the recipe.

use serde::{Deserialize, Serialize};

use super::NutritionCandidate;

/// Which macro column an aggregation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientField {
    Calories,
    Protein,
    Carbs,
    Fat,
}

/// A recipe ingredient as entered
///
/// Macro values are per 100 units of `quantity`, in whatever `unit` says.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// Partial overwrite of an ingredient row; `None` leaves a field alone
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientUpdate {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fat: Option<String>,
}

impl Ingredient {
    /// Raw text of one macro column
    pub fn nutrient_text(&self, field: NutrientField) -> &str {
        match field {
            NutrientField::Calories => &self.calories,
            NutrientField::Protein => &self.protein,
            NutrientField::Carbs => &self.carbs,
            NutrientField::Fat => &self.fat,
        }
    }

    /// Whether the row shows up in the ingredient table and recipe totals
    ///
    /// A row needs both a name and a quantity; blank rows are work in progress.
    pub fn is_listed(&self) -> bool {
        !self.name.trim().is_empty() && !self.quantity.trim().is_empty()
    }

    pub fn apply_update(&mut self, update: IngredientUpdate) {
        let IngredientUpdate { name, quantity, unit, calories, protein, carbs, fat } = update;
        let pairs = [
            (&mut self.name, name),
            (&mut self.quantity, quantity),
            (&mut self.unit, unit),
            (&mut self.calories, calories),
            (&mut self.protein, protein),
            (&mut self.carbs, carbs),
            (&mut self.fat, fat),
        ];
        for (slot, value) in pairs {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    /// Replace name, unit, quantity and all macros with a lookup result
    ///
    /// Quantity becomes the candidate's serving size so the row's macros keep
    /// their per-100 meaning at the candidate's standard serving.
    pub fn apply_candidate(&mut self, candidate: &NutritionCandidate) {
        self.name = candidate.name.clone();
        self.unit = candidate.serving_unit.clone();
        self.quantity = candidate.serving_size.to_string();
        self.calories = candidate.calories.to_string();
        self.protein = candidate.protein.to_string();
        self.carbs = candidate.carbs.to_string();
        self.fat = candidate.fat.to_string();
    }
}

impl From<IngredientUpdate> for Ingredient {
    fn from(update: IngredientUpdate) -> Self {
        let mut ingredient = Ingredient::default();
        ingredient.apply_update(update);
        ingredient
    }
}
