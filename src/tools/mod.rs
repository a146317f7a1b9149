//! MCP tools for interacting with Zoho CRM.
//!
//! This module provides the tool registry:
//! - **params**: Typed arguments (and input schemas) for every tool
//! - **call**: Parsing `(name, arguments)` into a typed call and shaping it into a client request
//! - **catalog**: The fixed, ordered list of tool definitions

pub mod call;
pub mod catalog;
pub mod params;

pub use call::{CrmRequest, ToolCall, ToolKind};
pub use catalog::list_tools;
pub use params::{
    CreateAccountParams, CreateContactParams, CreateLeadParams, CreateRecordParams,
    GetRecordsParams, ModuleParams, NoParams, RecordRefParams, SearchByEmailParams,
    SearchByPhoneParams, SearchRecordsParams, UpdateRecordParams,
};
