//! Recipe Portion Calculator Library
//!
//! Portion scaling, nutrition aggregation and ingredient search behind an MCP server.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod search;
pub mod tools;
