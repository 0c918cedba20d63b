//! Data models
//!
//! Recipe rows, lookup results and nutrition totals.

mod candidate;
mod ingredient;
mod nutrition;
mod recipe;

pub use candidate::NutritionCandidate;
pub use ingredient::{Ingredient, IngredientUpdate, NutrientField};
pub use nutrition::{Nutrition, NutritionDisplay};
pub use recipe::{Recipe, RecipeError};
