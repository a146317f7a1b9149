//! MCP server implementation for Zoho CRM.
//!
//! This module provides the MCP protocol server that exposes Zoho CRM
//! operations to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::ZohoCrmMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the Zoho CRM MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when the
/// peer closes the connection.
pub async fn run_server(server: ZohoCrmMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
