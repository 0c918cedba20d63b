//! Recipe Portion Calculator
//!
//! An MCP server for scaling recipes and totalling their nutrition.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use portions::build_info;
use portions::config::Config;
use portions::mcp::PortionService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("portions=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env();
    tracing::info!(
        debounce_ms = config.search_debounce.as_millis() as u64,
        mock_latency_ms = config.mock_latency.as_millis() as u64,
        "Loaded configuration"
    );

    eprintln!("Starting MCP server on stdio...");
    let service = PortionService::new(&config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
