//! Portion Calculator MCP Server Implementation
//!
//! Owns the single recipe session and exposes it as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::models::{IngredientUpdate, Recipe};
use crate::search::{IngredientSource, MockIngredientSource, SearchCoordinator};
use crate::tools::recipes;
use crate::tools::search;
use crate::tools::status::StatusTracker;

/// Portion Calculator MCP Service
#[derive(Clone)]
pub struct PortionService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    recipe: Arc<Mutex<Recipe>>,
    search: Arc<SearchCoordinator>,
    tool_router: ToolRouter<PortionService>,
}

impl PortionService {
    /// Service backed by the canned ingredient source
    pub fn new(config: &Config) -> Self {
        let source = Arc::new(MockIngredientSource::new(config.mock_latency));
        Self::with_source(source, config)
    }

    /// Service backed by any ingredient source
    pub fn with_source(source: Arc<dyn IngredientSource>, config: &Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            recipe: Arc::new(Mutex::new(Recipe::new())),
            search: Arc::new(SearchCoordinator::new(source, config.search_debounce)),
            tool_router: Self::tool_router(),
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Ingredient Parameter Structs
// ============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct IngredientFieldsParams {
    /// Ingredient name
    pub name: Option<String>,
    /// Amount used in the original recipe (numeric text, e.g. "250")
    pub quantity: Option<String>,
    /// Free-form unit label (e.g. "g", "cup"); never converted
    pub unit: Option<String>,
    /// Calories per 100 units of quantity
    pub calories: Option<String>,
    /// Protein grams per 100 units of quantity
    pub protein: Option<String>,
    /// Carbohydrate grams per 100 units of quantity
    pub carbs: Option<String>,
    /// Fat grams per 100 units of quantity
    pub fat: Option<String>,
}

impl From<IngredientFieldsParams> for IngredientUpdate {
    fn from(p: IngredientFieldsParams) -> Self {
        IngredientUpdate {
            name: p.name,
            quantity: p.quantity,
            unit: p.unit,
            calories: p.calories,
            protein: p.protein,
            carbs: p.carbs,
            fat: p.fat,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateIngredientParams {
    /// Row index (0-based)
    pub index: usize,
    /// Fields to overwrite; omitted fields are left unchanged
    #[serde(flatten)]
    pub fields: IngredientFieldsParams,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveIngredientParams {
    /// Row index (0-based)
    pub index: usize,
}

// ============================================================================
// Portion Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetPortionsParams {
    /// Servings the recipe makes as written (whole number, at least 1)
    pub original: Option<String>,
    /// Servings wanted (whole number, 1 to 20)
    pub desired: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleQuantityParams {
    /// Quantity text to scale by the current desired/original ratio
    pub quantity: String,
}

// ============================================================================
// Search Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchIngredientsParams {
    /// Food name to look up (at least 3 characters)
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectCandidateParams {
    /// Ingredient row to fill (0-based)
    pub row: usize,
    /// Index into the current search results (0-based)
    pub candidate: usize,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl PortionService {
    // --- Status ---

    #[tool(description = "Get the current status of the portion calculator including build info, session size, and process information")]
    async fn get_status(&self) -> Result<CallToolResult, McpError> {
        let rows = self.recipe.lock().await.ingredients().len();
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(rows, self.search.latest_request());
        json_result(&status)
    }

    #[tool(description = "Get instructions for using the portion calculator. Call this first when unsure how rows, portions, or ingredient search work.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Recipe ---

    #[tool(description = "Get the recipe with adjusted quantities, nutrition totals, per-serving values and macro percentages for original and desired portions")]
    async fn get_recipe(&self) -> Result<CallToolResult, McpError> {
        let recipe = self.recipe.lock().await;
        let result = recipes::get_recipe(&recipe).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Append an ingredient row. All fields are optional text; macros are per 100 units of quantity.")]
    async fn add_ingredient(&self, Parameters(p): Parameters<IngredientFieldsParams>) -> Result<CallToolResult, McpError> {
        let mut recipe = self.recipe.lock().await;
        let result = recipes::add_ingredient(&mut recipe, p.into()).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Overwrite some fields of an ingredient row; omitted fields stay as they are")]
    async fn update_ingredient(&self, Parameters(p): Parameters<UpdateIngredientParams>) -> Result<CallToolResult, McpError> {
        let mut recipe = self.recipe.lock().await;
        let result = recipes::update_ingredient(&mut recipe, p.index, p.fields.into())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Remove an ingredient row. The last remaining row is never removed.")]
    async fn remove_ingredient(&self, Parameters(p): Parameters<RemoveIngredientParams>) -> Result<CallToolResult, McpError> {
        let mut recipe = self.recipe.lock().await;
        let result = recipes::remove_ingredient(&mut recipe, p.index)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Set original and/or desired portions. Values are truncated to whole numbers; original is at least 1, desired is clamped to 1-20.")]
    async fn set_portions(&self, Parameters(p): Parameters<SetPortionsParams>) -> Result<CallToolResult, McpError> {
        let mut recipe = self.recipe.lock().await;
        let result = recipes::set_portions(&mut recipe, p.original.as_deref(), p.desired.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Start over with one empty ingredient row and 4/4 portions")]
    async fn reset_recipe(&self) -> Result<CallToolResult, McpError> {
        let mut recipe = self.recipe.lock().await;
        let result = recipes::reset_recipe(&mut recipe).map_err(|e| McpError::internal_error(e, None))?;
        self.search.clear();
        json_result(&result)
    }

    #[tool(description = "Scale a single quantity by the recipe's current desired/original ratio")]
    async fn scale_quantity(&self, Parameters(p): Parameters<ScaleQuantityParams>) -> Result<CallToolResult, McpError> {
        let recipe = self.recipe.lock().await;
        json_result(&recipes::scale_quantity_for(&recipe, &p.quantity))
    }

    // --- Ingredient Search ---

    #[tool(description = "Look up nutrition candidates for an ingredient name. Queries under 3 characters clear the results. Only the newest search's results are kept.")]
    async fn search_ingredients(&self, Parameters(p): Parameters<SearchIngredientsParams>) -> Result<CallToolResult, McpError> {
        let result = search::search_ingredients(&self.search, &p.query).await;
        json_result(&result)
    }

    #[tool(description = "Copy a search result into an ingredient row, replacing its name, unit, quantity and macros")]
    async fn select_candidate(&self, Parameters(p): Parameters<SelectCandidateParams>) -> Result<CallToolResult, McpError> {
        let mut recipe = self.recipe.lock().await;
        let result = search::select_candidate(&mut recipe, &self.search, p.row, p.candidate)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for PortionService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "portions".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Recipe Portion Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Recipe Portion Calculator - scale a recipe to a new serving count and see its nutrition. \
                 Call calculator_instructions first. \
                 Rows: add/update/remove_ingredient (macros per 100 units of quantity). \
                 Portions: set_portions (original >= 1, desired 1-20). \
                 Results: get_recipe, scale_quantity. \
                 Search: search_ingredients then select_candidate. \
                 reset_recipe starts over; get_status reports build and process info."
                    .into(),
            ),
        }
    }
}
