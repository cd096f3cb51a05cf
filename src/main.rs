use mcp_mealdb::client::MealDbClient;
use mcp_mealdb::server::MealDbMcpServer;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment variables
    let client = MealDbClient::from_env();
    let base_url = client.base_url().to_string();

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    // An unreachable MealDB at startup is not fatal; each tool call issues its own request
    tracing::info!("Checking MealDB API access at {}...", base_url);
    let probe = MealDbMcpServer::with_client(client.clone());
    if let Err(e) = probe.check_api_access().await {
        tracing::warn!("API access test failed: {}", e);
        tracing::warn!("Please verify:");
        tracing::warn!("  - MEALDB_BASE_URL is correct: {}", base_url);
        tracing::warn!("  - The network allows outbound HTTPS requests");
        tracing::warn!("The server will continue, but tool calls may fail until MealDB is reachable.");
    }

    // Create server configuration and start SSE server
    let config = SseServerConfig {
        bind: bind_addr.parse()?,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    tracing::info!("MealDB MCP Server listening on {}", config.bind);

    // serve_with_config handles binding, axum server setup, and graceful shutdown internally
    let sse_server = SseServer::serve_with_config(config).await?;

    let ct = sse_server.with_service(move || MealDbMcpServer::with_client(client.clone()));

    tracing::info!("MealDB MCP Server started successfully");

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    Ok(())
}
