//! Canned ingredient source
//!
//! Answers every query with the same three preparations of the queried food,
//! after a fixed delay standing in for network latency.

use std::time::Duration;

use async_trait::async_trait;

use super::IngredientSource;
use crate::models::NutritionCandidate;

/// Default simulated lookup latency
pub const DEFAULT_MOCK_LATENCY: Duration = Duration::from_millis(600);

/// (label, calories, protein, carbs, fat) per 100 g
const CANNED: [(&str, f64, f64, f64, f64); 3] = [
    ("raw", 165.0, 31.0, 0.0, 3.6),
    ("cooked", 195.0, 29.6, 0.0, 7.7),
    ("canned", 120.0, 25.0, 0.5, 2.0),
];

#[derive(Debug, Clone)]
pub struct MockIngredientSource {
    latency: Duration,
}

impl MockIngredientSource {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockIngredientSource {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_LATENCY)
    }
}

#[async_trait]
impl IngredientSource for MockIngredientSource {
    async fn search(&self, query: &str) -> Vec<NutritionCandidate> {
        tokio::time::sleep(self.latency).await;

        CANNED
            .iter()
            .map(|&(label, calories, protein, carbs, fat)| NutritionCandidate {
                name: format!("{} ({})", query, label),
                calories,
                protein,
                carbs,
                fat,
                serving_size: 100.0,
                serving_unit: "g".to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_mock_returns_three_named_candidates() {
        let source = MockIngredientSource::default();
        let started = tokio::time::Instant::now();
        let results = source.search("chicken").await;

        assert!(started.elapsed() >= DEFAULT_MOCK_LATENCY);
        let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["chicken (raw)", "chicken (cooked)", "chicken (canned)"]);
        assert!(results.iter().all(|c| c.serving_size == 100.0 && c.serving_unit == "g"));
        assert_eq!(results[0].protein, 31.0);
    }
}
