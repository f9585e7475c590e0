//! Spoon Converter (spoonconv)
//!
//! An MCP server converting recipe quantities to spoon measures.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use spoonconv::build_info;
use spoonconv::config::Config;
use spoonconv::mcp::SpoonService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("spoonconv=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    tracing::info!("Default spoon label locale: {}", config.locale);

    eprintln!("Starting MCP server on stdio...");
    let service = SpoonService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
