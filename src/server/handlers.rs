//! MCP request handlers for the Zoho CRM server.
//!
//! `tools/list` and `tools/call` are implemented by hand rather than through the
//! `#[tool_router]` macro: the catalog is a fixed table, and an unknown tool name
//! must come back as a text reply instead of a protocol error.

use crate::dispatch::{Dispatcher, ToolReply};
use crate::tools::list_tools;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};

/// The Zoho CRM MCP server that exposes CRM operations as tools.
#[derive(Clone)]
pub struct ZohoCrmMcpServer {
    dispatcher: Dispatcher,
}

impl ZohoCrmMcpServer {
    /// Create a new server around an already-built dispatcher.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl From<ToolReply> for CallToolResult {
    fn from(reply: ToolReply) -> Self {
        let content = vec![Content::text(reply.text)];
        if reply.is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

impl ServerHandler for ZohoCrmMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "zoho-crm".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for Zoho CRM - read, search, create, update, and delete records in any module (Leads, Contacts, Accounts, Deals, ...), plus module, field, user, and organization metadata. Search criteria use the form Field:operator:value, e.g. Email:equals:john@example.com.".into()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(list_tools().to_vec()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let reply = self
            .dispatcher
            .call_tool(&request.name, request.arguments.as_ref())
            .await;
        Ok(reply.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info() {
        let server = ZohoCrmMcpServer::new(Dispatcher::uninitialized("test"));
        let info = server.get_info();
        assert_eq!(info.server_info.name, "zoho-crm");
        assert!(info.capabilities.tools.is_some());
        assert!(!server.dispatcher().is_initialized());
    }

    #[test]
    fn test_reply_maps_error_flag() {
        let ok: CallToolResult = ToolReply::success("{}".to_string()).into();
        assert_eq!(ok.is_error, Some(false));

        let err: CallToolResult = ToolReply::error("Error: Unknown tool 'x'".to_string()).into();
        assert_eq!(err.is_error, Some(true));
        assert_eq!(err.content.len(), 1);
    }
}
