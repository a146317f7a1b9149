//! Tool dispatch and the text-reply boundary.
//!
//! Every tool call ends here as exactly one text payload. Typed `CrmError`s
//! flow up to `Dispatcher::call_tool`, which renders them; nothing escapes.

use crate::client::AsyncCrmClient;
use crate::error::{CrmError, CrmResult};
use crate::tools::{CrmRequest, ToolCall};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Reply sent for every call while the client could not be initialized.
pub const NOT_INITIALIZED: &str =
    "Error: Zoho CRM client not initialized. Check your Nango configuration.";

/// The CRM client, or the reason there is none.
pub enum ClientState {
    Ready(Arc<dyn AsyncCrmClient>),
    Uninitialized { reason: String },
}

/// The single text payload returned for a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReply {
    pub text: String,
    pub is_error: bool,
}

impl ToolReply {
    pub fn success(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    pub fn error(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }
}

/// Render an error the way callers see it.
pub fn render_error(err: &CrmError) -> String {
    match err {
        CrmError::UnknownTool(name) => format!("Error: Unknown tool '{}'", name),
        e if e.is_crm_error() => format!("Zoho CRM Error: {}", e),
        e => format!("Error executing tool: {}", e),
    }
}

/// Run one client operation.
pub async fn execute(client: &dyn AsyncCrmClient, request: CrmRequest) -> CrmResult<Value> {
    match request {
        CrmRequest::ListRecords { module, params } => client.list_records(&module, &params).await,
        CrmRequest::GetRecord { module, id } => client.get_record(&module, &id).await,
        CrmRequest::CreateRecord { module, data } => client.create_record(&module, &data).await,
        CrmRequest::UpdateRecord { module, id, data } => {
            client.update_record(&module, &id, &data).await
        }
        CrmRequest::DeleteRecord { module, id } => client.delete_record(&module, &id).await,
        CrmRequest::SearchRecords {
            module,
            criteria,
            params,
        } => client.search_records(&module, &criteria, &params).await,
        CrmRequest::ListModules => client.list_modules().await,
        CrmRequest::GetFields { module } => client.get_fields(&module).await,
        CrmRequest::ListUsers => client.list_users().await,
        CrmRequest::GetOrg => client.get_org().await,
    }
}

/// Routes tool calls to the CRM client.
#[derive(Clone)]
pub struct Dispatcher {
    state: Arc<ClientState>,
}

impl Dispatcher {
    pub fn new(state: ClientState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    pub fn ready(client: Arc<dyn AsyncCrmClient>) -> Self {
        Self::new(ClientState::Ready(client))
    }

    pub fn uninitialized(reason: impl Into<String>) -> Self {
        Self::new(ClientState::Uninitialized {
            reason: reason.into(),
        })
    }

    pub fn is_initialized(&self) -> bool {
        matches!(*self.state, ClientState::Ready(_))
    }

    /// Handle one tool call. Always returns a reply.
    pub async fn call_tool(&self, name: &str, arguments: Option<&Map<String, Value>>) -> ToolReply {
        let client = match &*self.state {
            ClientState::Ready(client) => client.clone(),
            ClientState::Uninitialized { reason } => {
                tracing::warn!("Tool {} called without a CRM client: {}", name, reason);
                return ToolReply::error(NOT_INITIALIZED.to_string());
            }
        };

        tracing::info!("Tool call: {}", name);
        let result = Self::run(client.as_ref(), name, arguments).await;

        match result.and_then(|value| serde_json::to_string_pretty(&value).map_err(CrmError::from)) {
            Ok(text) => ToolReply::success(text),
            Err(err) => {
                match &err {
                    CrmError::Unexpected(_) | CrmError::Transport(_) => {
                        tracing::error!("Tool execution error in {}: {}", name, err)
                    }
                    _ => tracing::warn!("Tool {} failed: {}", name, err),
                }
                ToolReply::error(render_error(&err))
            }
        }
    }

    async fn run(
        client: &dyn AsyncCrmClient,
        name: &str,
        arguments: Option<&Map<String, Value>>,
    ) -> CrmResult<Value> {
        let request = ToolCall::parse(name, arguments)?.into_request()?;
        tracing::debug!("Dispatching {:?}", request);
        execute(client, request).await
    }
}
