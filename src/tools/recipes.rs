//! Recipe MCP Tools
//!
//! Editing the recipe's rows and portion counts, and rendering everything the
//! calculator derives from them. Every edit answers with a fresh summary.

use serde::Serialize;

use crate::models::{Ingredient, IngredientUpdate, Nutrition, NutritionDisplay, Recipe};
use crate::nutrition::{scale_quantity, CalcError, MacroPercentages};

/// One line of the ingredient table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientLine {
    /// Index of the underlying row in the recipe
    pub row: usize,
    pub name: String,
    pub quantity: String,
    pub adjusted_quantity: String,
    pub unit: String,
}

/// Totals, per-serving values and macro badges for one portion count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionFacts {
    pub portions: u32,
    pub total: NutritionDisplay,
    pub per_serving: NutritionDisplay,
    /// Absent when the recipe has no calories
    pub macro_percentages: Option<MacroPercentages>,
}

impl NutritionFacts {
    fn new(total: Nutrition, portions: u32) -> Result<Self, CalcError> {
        Ok(Self {
            portions,
            total: total.display(),
            per_serving: total.per_serving(portions as f64)?.display(),
            macro_percentages: total.macro_percentages(),
        })
    }
}

/// Everything the recipe view shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSummary {
    pub original_portions: u32,
    pub desired_portions: u32,
    pub scale_ratio: f64,
    /// Every row as entered, including incomplete ones
    pub rows: Vec<Ingredient>,
    /// Rows with a name and a quantity, with adjusted quantities
    pub ingredients: Vec<IngredientLine>,
    pub original: NutritionFacts,
    pub adjusted: NutritionFacts,
}

/// Derive the full view of a recipe
pub fn summarize(recipe: &Recipe) -> Result<RecipeSummary, CalcError> {
    let scale = recipe.scale();
    let ratio = scale.ratio();

    let ingredients = recipe
        .ingredients()
        .iter()
        .enumerate()
        .filter(|(_, ingredient)| ingredient.is_listed())
        .map(|(row, ingredient)| IngredientLine {
            row,
            name: ingredient.name.clone(),
            quantity: ingredient.quantity.clone(),
            adjusted_quantity: scale_quantity(&ingredient.quantity, ratio),
            unit: ingredient.unit.clone(),
        })
        .collect();

    let original = Nutrition::from_ingredients(recipe.listed_ingredients(), None);
    let adjusted = Nutrition::from_ingredients(recipe.listed_ingredients(), Some(ratio));

    Ok(RecipeSummary {
        original_portions: scale.original_portions(),
        desired_portions: scale.desired_portions(),
        scale_ratio: ratio,
        rows: recipe.ingredients().to_vec(),
        ingredients,
        original: NutritionFacts::new(original, scale.original_portions())?,
        adjusted: NutritionFacts::new(adjusted, scale.desired_portions())?,
    })
}

fn summary_for(recipe: &Recipe) -> Result<RecipeSummary, String> {
    summarize(recipe).map_err(|e| format!("Calculation error: {}", e))
}

/// Response for add_ingredient
#[derive(Debug, Serialize)]
pub struct AddIngredientResponse {
    pub index: usize,
    pub row_count: usize,
    pub summary: RecipeSummary,
}

/// Response for update_ingredient
#[derive(Debug, Serialize)]
pub struct UpdateIngredientResponse {
    pub index: usize,
    pub ingredient: Ingredient,
    pub summary: RecipeSummary,
}

/// Response for remove_ingredient
#[derive(Debug, Serialize)]
pub struct RemoveIngredientResponse {
    pub removed: bool,
    pub row_count: usize,
    pub message: String,
    pub summary: RecipeSummary,
}

/// Response for set_portions
#[derive(Debug, Serialize)]
pub struct SetPortionsResponse {
    pub original_portions: u32,
    pub desired_portions: u32,
    pub scale_ratio: f64,
    pub summary: RecipeSummary,
}

/// Response for scale_quantity
#[derive(Debug, Serialize)]
pub struct ScaleQuantityResponse {
    pub quantity: String,
    pub adjusted_quantity: String,
    pub scale_ratio: f64,
}

// ============================================================================
// Recipe Tools
// ============================================================================

pub fn get_recipe(recipe: &Recipe) -> Result<RecipeSummary, String> {
    summary_for(recipe)
}

/// Append a row; every field is optional
pub fn add_ingredient(
    recipe: &mut Recipe,
    data: IngredientUpdate,
) -> Result<AddIngredientResponse, String> {
    let index = recipe.add_ingredient(Ingredient::from(data));
    Ok(AddIngredientResponse {
        index,
        row_count: recipe.ingredients().len(),
        summary: summary_for(recipe)?,
    })
}

pub fn update_ingredient(
    recipe: &mut Recipe,
    index: usize,
    data: IngredientUpdate,
) -> Result<UpdateIngredientResponse, String> {
    let ingredient = recipe
        .update_ingredient(index, data)
        .map_err(|e| e.to_string())?
        .clone();
    Ok(UpdateIngredientResponse {
        index,
        ingredient,
        summary: summary_for(recipe)?,
    })
}

pub fn remove_ingredient(
    recipe: &mut Recipe,
    index: usize,
) -> Result<RemoveIngredientResponse, String> {
    let removed = recipe.remove_ingredient(index).map_err(|e| e.to_string())?;
    let message = if removed {
        format!("Removed ingredient row {}", index)
    } else {
        "A recipe keeps at least one ingredient row; nothing removed".to_string()
    };
    Ok(RemoveIngredientResponse {
        removed,
        row_count: recipe.ingredients().len(),
        message,
        summary: summary_for(recipe)?,
    })
}

/// Set either or both portion counts from user text
pub fn set_portions(
    recipe: &mut Recipe,
    original: Option<&str>,
    desired: Option<&str>,
) -> Result<SetPortionsResponse, String> {
    if let Some(text) = original {
        recipe.set_original_portions(text);
    }
    if let Some(text) = desired {
        recipe.set_desired_portions(text);
    }

    let scale = recipe.scale();
    Ok(SetPortionsResponse {
        original_portions: scale.original_portions(),
        desired_portions: scale.desired_portions(),
        scale_ratio: scale.ratio(),
        summary: summary_for(recipe)?,
    })
}

pub fn reset_recipe(recipe: &mut Recipe) -> Result<RecipeSummary, String> {
    recipe.reset();
    tracing::info!("Recipe reset");
    summary_for(recipe)
}

/// Scale one quantity against the recipe's current portions
pub fn scale_quantity_for(recipe: &Recipe, quantity: &str) -> ScaleQuantityResponse {
    let ratio = recipe.scale().ratio();
    ScaleQuantityResponse {
        quantity: quantity.to_string(),
        adjusted_quantity: scale_quantity(quantity, ratio),
        scale_ratio: ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken_update() -> IngredientUpdate {
        IngredientUpdate {
            name: Some("Chicken breast".to_string()),
            quantity: Some("100".to_string()),
            unit: Some("g".to_string()),
            calories: Some("165".to_string()),
            protein: Some("31".to_string()),
            carbs: Some("0".to_string()),
            fat: Some("3.6".to_string()),
        }
    }

    #[test]
    fn test_fresh_recipe_summary_is_empty() {
        let summary = get_recipe(&Recipe::new()).unwrap();
        assert_eq!(summary.rows.len(), 1);
        assert!(summary.ingredients.is_empty());
        assert_eq!(summary.original.total.calories, "0");
        assert_eq!(summary.adjusted.per_serving.calories, "0");
        assert_eq!(summary.original.macro_percentages, None);
    }

    #[test]
    fn test_double_batch_end_to_end() {
        let mut recipe = Recipe::new();
        update_ingredient(&mut recipe, 0, chicken_update()).unwrap();
        let response = set_portions(&mut recipe, Some("4"), Some("8")).unwrap();
        assert!((response.scale_ratio - 2.0).abs() < 1e-12);

        let summary = response.summary;
        assert_eq!(summary.ingredients.len(), 1);
        assert_eq!(summary.ingredients[0].adjusted_quantity, "200");

        assert_eq!(summary.original.total.calories, "165");
        assert_eq!(summary.original.per_serving.calories, "41.3");
        assert_eq!(summary.adjusted.total.calories, "330");
        assert_eq!(summary.adjusted.per_serving.calories, "41.3");
        assert_eq!(summary.adjusted.total.protein, "62");

        let badges = summary.adjusted.macro_percentages.unwrap();
        assert_eq!(badges, MacroPercentages { protein: 75, carbs: 0, fat: 20 });
    }

    #[test]
    fn test_unnamed_rows_are_left_out_of_totals() {
        let mut recipe = Recipe::new();
        update_ingredient(&mut recipe, 0, chicken_update()).unwrap();
        let nameless = IngredientUpdate {
            name: None,
            ..chicken_update()
        };
        let added = add_ingredient(&mut recipe, nameless).unwrap();
        assert_eq!(added.index, 1);
        assert_eq!(added.summary.rows.len(), 2);
        assert_eq!(added.summary.ingredients.len(), 1);
        assert_eq!(added.summary.original.total.calories, "165");
    }

    #[test]
    fn test_unparseable_quantity_is_echoed() {
        let mut recipe = Recipe::new();
        let pinch = IngredientUpdate {
            name: Some("Salt".to_string()),
            quantity: Some("a pinch".to_string()),
            calories: Some("0".to_string()),
            ..Default::default()
        };
        update_ingredient(&mut recipe, 0, pinch).unwrap();
        let summary = set_portions(&mut recipe, None, Some("12")).unwrap().summary;
        assert_eq!(summary.ingredients[0].adjusted_quantity, "a pinch");
        assert_eq!(summary.adjusted.total.calories, "0");
    }

    #[test]
    fn test_remove_last_row_reports_noop() {
        let mut recipe = Recipe::new();
        let response = remove_ingredient(&mut recipe, 0).unwrap();
        assert!(!response.removed);
        assert_eq!(response.row_count, 1);
    }

    #[test]
    fn test_remove_out_of_range_is_error() {
        let mut recipe = Recipe::new();
        add_ingredient(&mut recipe, IngredientUpdate::default()).unwrap();
        assert!(remove_ingredient(&mut recipe, 9).is_err());
    }

    #[test]
    fn test_set_portions_clamps_and_reports() {
        let mut recipe = Recipe::new();
        let response = set_portions(&mut recipe, Some("abc"), Some("25")).unwrap();
        assert_eq!(response.original_portions, 1);
        assert_eq!(response.desired_portions, 20);
        assert_eq!(response.summary.original.portions, 1);
    }

    #[test]
    fn test_scale_quantity_for_uses_current_ratio() {
        let mut recipe = Recipe::new();
        set_portions(&mut recipe, Some("4"), Some("6")).unwrap();
        let response = scale_quantity_for(&recipe, "2");
        assert_eq!(response.adjusted_quantity, "3");
    }

    #[test]
    fn test_reset_recipe() {
        let mut recipe = Recipe::new();
        add_ingredient(&mut recipe, chicken_update()).unwrap();
        let summary = reset_recipe(&mut recipe).unwrap();
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.desired_portions, 4);
    }
}
