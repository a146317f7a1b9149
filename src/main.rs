//! Zoho CRM MCP Server - Main entry point
//!
//! This is the main executable for the Zoho CRM MCP Server, which provides a Model
//! Context Protocol (MCP) interface to Zoho CRM over stdio.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use zoho_crm_mcp_server::{
    fetch_credentials, AsyncCrmClient, AsyncCrmClientImpl, BrokerSettings, Config, CrmError,
    CrmResult, Dispatcher, Metrics, ZohoCrmClient, ZohoCrmMcpServer,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    // RUST_LOG wins, then LOG_LEVEL, then "info"
    let filter = EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| {
            std::env::var("LOG_LEVEL")
                .ok()
                .filter(|level| !level.trim().is_empty())
                .and_then(|level| EnvFilter::try_new(level.trim().to_lowercase()).ok())
        })
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let (dispatcher, metrics) = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            match connect(&config).await {
                Ok(client) => {
                    info!(
                        "Zoho CRM client initialized for {}",
                        client.inner().base_url()
                    );
                    let metrics = client.inner().metrics().clone();
                    let client = Arc::new(client) as Arc<dyn AsyncCrmClient>;
                    (Dispatcher::ready(client), Some(metrics))
                }
                Err(e) => {
                    error!("Failed to initialize Zoho CRM client: {}", e);
                    (Dispatcher::uninitialized(e.to_string()), None)
                }
            }
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            (Dispatcher::uninitialized(e.to_string()), None)
        }
    };

    // The server starts either way; tool calls report the missing client.
    info!("Starting MCP server with stdio transport");
    let server = ZohoCrmMcpServer::new(dispatcher);
    zoho_crm_mcp_server::server::run_server(server).await?;

    if let Some(metrics) = metrics {
        log_metrics(&metrics);
    }
    info!("Zoho CRM MCP Server shutdown complete");
    Ok(())
}

/// Fetch a token from the broker and build the CRM client.
async fn connect(config: &Config) -> CrmResult<AsyncCrmClientImpl> {
    let settings = BrokerSettings::from_config(config);
    info!(
        "Fetching credentials for connection {} from {}",
        settings.connection_id, settings.base_url
    );

    let credentials = tokio::task::spawn_blocking(move || fetch_credentials(&settings))
        .await
        .map_err(|e| CrmError::Unexpected(format!("Task join error: {}", e)))??;

    let client = ZohoCrmClient::new(
        &config.region,
        credentials,
        Duration::from_secs(config.request_timeout),
    );
    Ok(AsyncCrmClientImpl::new(client))
}

fn log_metrics(metrics: &Metrics) {
    let summary = metrics.summary();
    info!(
        "HTTP requests: {} ({} errors, {} raw responses), avg {:.1} ms",
        summary.http_requests_total,
        summary.http_errors_total,
        summary.raw_responses_total,
        summary.http_duration_avg_ms
    );
}
