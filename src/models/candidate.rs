//! Ingredient lookup result

use serde::{Deserialize, Serialize};

/// A food offered by an ingredient search
///
/// Values are absolute for one standard serving of `serving_size` `serving_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionCandidate {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub serving_size: f64,
    pub serving_unit: String,
}
