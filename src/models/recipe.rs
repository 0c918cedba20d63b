//! Recipe model
//!
//! The recipe being edited: an ordered list of ingredient rows plus the
//! portion scale. It always holds at least one row.

use serde::Serialize;
use thiserror::Error;

use super::{Ingredient, IngredientUpdate, NutritionCandidate};
use crate::nutrition::RecipeScale;

/// Recipe editing error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Ingredient row {index} does not exist (recipe has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("Search result {index} does not exist ({len} results available)")]
    CandidateOutOfRange { index: usize, len: usize },
}

/// Result type for recipe edits
type RecipeResult<T> = Result<T, RecipeError>;

/// A recipe under construction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    ingredients: Vec<Ingredient>,
    scale: RecipeScale,
}

impl Recipe {
    /// One empty row at the default scale
    pub fn new() -> Self {
        Self {
            ingredients: vec![Ingredient::default()],
            scale: RecipeScale::default(),
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Rows with both a name and a quantity, in list order
    pub fn listed_ingredients(&self) -> impl Iterator<Item = &Ingredient> + Clone {
        self.ingredients.iter().filter(|i| i.is_listed())
    }

    pub fn scale(&self) -> RecipeScale {
        self.scale
    }

    fn ingredient_mut(&mut self, index: usize) -> RecipeResult<&mut Ingredient> {
        let len = self.ingredients.len();
        self.ingredients
            .get_mut(index)
            .ok_or(RecipeError::RowOutOfRange { index, len })
    }

    /// Append a row and return its index
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> usize {
        self.ingredients.push(ingredient);
        let index = self.ingredients.len() - 1;
        tracing::info!(index, rows = self.ingredients.len(), "Added ingredient row");
        index
    }

    pub fn update_ingredient(
        &mut self,
        index: usize,
        update: IngredientUpdate,
    ) -> RecipeResult<&Ingredient> {
        let row = self.ingredient_mut(index)?;
        row.apply_update(update);
        Ok(&*row)
    }

    /// Remove a row
    ///
    /// Returns `Ok(false)` without touching anything when it is the only row.
    pub fn remove_ingredient(&mut self, index: usize) -> RecipeResult<bool> {
        if self.ingredients.len() == 1 {
            tracing::debug!(index, "Refusing to remove the last ingredient row");
            return Ok(false);
        }

        let len = self.ingredients.len();
        if index >= len {
            return Err(RecipeError::RowOutOfRange { index, len });
        }

        self.ingredients.remove(index);
        tracing::info!(index, rows = self.ingredients.len(), "Removed ingredient row");
        Ok(true)
    }

    /// Fill a row from an ingredient search result
    pub fn apply_candidate(
        &mut self,
        index: usize,
        candidate: &NutritionCandidate,
    ) -> RecipeResult<&Ingredient> {
        let row = self.ingredient_mut(index)?;
        row.apply_candidate(candidate);
        tracing::info!(index, name = %candidate.name, "Applied search result to ingredient row");
        Ok(&*row)
    }

    /// Store user-entered original portions; returns the clamped value
    pub fn set_original_portions(&mut self, text: &str) -> u32 {
        let effective = self.scale.set_original_text(text);
        if text.trim() != effective.to_string() {
            tracing::debug!(input = text, effective, "Original portions clamped");
        }
        effective
    }

    /// Store user-entered desired portions; returns the clamped value
    pub fn set_desired_portions(&mut self, text: &str) -> u32 {
        let effective = self.scale.set_desired_text(text);
        if text.trim() != effective.to_string() {
            tracing::debug!(input = text, effective, "Desired portions clamped");
        }
        effective
    }

    /// Back to a single empty row and the default scale
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, quantity: &str) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            quantity: quantity.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_recipe_has_one_empty_row() {
        let recipe = Recipe::new();
        assert_eq!(recipe.ingredients().len(), 1);
        assert_eq!(recipe.ingredients()[0], Ingredient::default());
        assert_eq!(recipe.scale(), RecipeScale::default());
    }

    #[test]
    fn test_removing_last_row_is_noop() {
        let mut recipe = Recipe::new();
        assert_eq!(recipe.remove_ingredient(0), Ok(false));
        assert_eq!(recipe.remove_ingredient(7), Ok(false));
        assert_eq!(recipe.ingredients().len(), 1);
    }

    #[test]
    fn test_add_and_remove_keep_order() {
        let mut recipe = Recipe::new();
        let flour = IngredientUpdate {
            name: Some("Flour".to_string()),
            ..Default::default()
        };
        recipe.update_ingredient(0, flour).unwrap();
        assert_eq!(recipe.add_ingredient(named("Sugar", "50")), 1);
        assert_eq!(recipe.add_ingredient(named("Butter", "100")), 2);

        assert_eq!(recipe.remove_ingredient(1), Ok(true));
        let names: Vec<&str> = recipe.ingredients().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Flour", "Butter"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut recipe = Recipe::new();
        recipe.add_ingredient(Ingredient::default());
        assert_eq!(
            recipe.remove_ingredient(5),
            Err(RecipeError::RowOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_update_out_of_range() {
        let mut recipe = Recipe::new();
        let err = recipe.update_ingredient(3, IngredientUpdate::default()).unwrap_err();
        assert_eq!(err, RecipeError::RowOutOfRange { index: 3, len: 1 });
    }

    #[test]
    fn test_listed_ingredients_skip_blank_rows() {
        let mut recipe = Recipe::new();
        recipe.add_ingredient(named("Oats", "80"));
        recipe.add_ingredient(named("", "10"));
        recipe.add_ingredient(named("Milk", ""));
        let listed: Vec<&str> = recipe.listed_ingredients().map(|i| i.name.as_str()).collect();
        assert_eq!(listed, vec!["Oats"]);
    }

    #[test]
    fn test_portion_setters_clamp() {
        let mut recipe = Recipe::new();
        assert_eq!(recipe.set_desired_portions("25"), 20);
        assert_eq!(recipe.set_original_portions("-2"), 1);
        assert!((recipe.scale().ratio() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_candidate_to_row() {
        let mut recipe = Recipe::new();
        let candidate = NutritionCandidate {
            name: "lentils (cooked)".to_string(),
            calories: 116.0,
            protein: 9.0,
            carbs: 20.0,
            fat: 0.4,
            serving_size: 100.0,
            serving_unit: "g".to_string(),
        };
        let row = recipe.apply_candidate(0, &candidate).unwrap();
        assert_eq!(row.quantity, "100");
        assert_eq!(row.fat, "0.4");
        assert!(recipe.apply_candidate(1, &candidate).is_err());
    }

    #[test]
    fn test_reset() {
        let mut recipe = Recipe::new();
        recipe.add_ingredient(named("Eggs", "2"));
        recipe.set_desired_portions("10");
        recipe.reset();
        assert_eq!(recipe, Recipe::new());
    }
}
