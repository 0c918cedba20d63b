//! Ingredient Search MCP Tools
//!
//! Looking up candidates and copying one into a recipe row.

use serde::Serialize;

use crate::models::{Ingredient, Recipe, RecipeError};
use crate::search::{SearchCoordinator, SearchOutcome, SearchState};
use crate::tools::recipes::{summarize, RecipeSummary};

/// Response for search_ingredients
#[derive(Debug, Serialize)]
pub struct SearchIngredientsResponse {
    pub outcome: SearchOutcome,
    /// The result set a user would now see
    pub visible: SearchState,
}

/// Response for select_candidate
#[derive(Debug, Serialize)]
pub struct SelectCandidateResponse {
    pub row: usize,
    pub ingredient: Ingredient,
    pub summary: RecipeSummary,
}

pub async fn search_ingredients(
    search: &SearchCoordinator,
    query: &str,
) -> SearchIngredientsResponse {
    let outcome = search.search(query).await;
    SearchIngredientsResponse {
        outcome,
        visible: search.state(),
    }
}

/// Copy a visible search result into a recipe row and close the result list
pub fn select_candidate(
    recipe: &mut Recipe,
    search: &SearchCoordinator,
    row: usize,
    candidate_index: usize,
) -> Result<SelectCandidateResponse, String> {
    let candidate = search.candidate(candidate_index).ok_or_else(|| {
        RecipeError::CandidateOutOfRange {
            index: candidate_index,
            len: search.result_count(),
        }
        .to_string()
    })?;

    let ingredient = recipe
        .apply_candidate(row, &candidate)
        .map_err(|e| e.to_string())?
        .clone();
    search.clear();

    let summary = summarize(recipe).map_err(|e| format!("Calculation error: {}", e))?;
    Ok(SelectCandidateResponse {
        row,
        ingredient,
        summary,
    })
}
