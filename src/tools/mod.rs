//! Calculator Tools module
//!
//! MCP tool implementations for the recipe portion calculator.

pub mod recipes;
pub mod search;
pub mod status;
