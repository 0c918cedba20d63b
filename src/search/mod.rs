//! Ingredient search
//!
//! Looks up nutrition candidates for a typed ingredient name. The data source
//! is pluggable; the coordinator decides when a lookup is worth making and
//! which completion gets to update the visible results.

pub mod coordinator;
pub mod mock;

use async_trait::async_trait;

use crate::models::NutritionCandidate;

pub use coordinator::{SearchCoordinator, SearchOutcome, SearchState, MIN_QUERY_CHARS};
pub use mock::MockIngredientSource;

/// Anything that can turn a query into nutrition candidates
#[async_trait]
pub trait IngredientSource: Send + Sync {
    async fn search(&self, query: &str) -> Vec<NutritionCandidate>;
}
