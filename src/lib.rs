//! Zoho CRM MCP Server - a Model Context Protocol adapter for Zoho CRM.
//!
//! This library exposes Zoho CRM's REST API (v2) to AI assistants as a fixed
//! catalog of MCP tools. OAuth tokens come from a Nango-style token broker.
//!
//! # Architecture
//!
//! - **config**: Configuration management from environment variables
//! - **error**: Error types and their user-facing rendering
//! - **domain**: Validated value objects (module names, record ids, criteria, regions)
//! - **broker**: Credential retrieval from the token broker
//! - **client**: HTTP client for the Zoho CRM API and its async wrapper
//! - **metrics**: Request counters and timings
//! - **tools**: Tool arguments, schemas, and the static catalog
//! - **dispatch**: Routing tool calls to the client and rendering replies
//! - **server**: MCP protocol server

pub mod broker;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod server;
pub mod tools;

pub use broker::{fetch_credentials, BrokerSettings, Credentials};
pub use client::{AsyncCrmClient, AsyncCrmClientImpl, Record, ZohoCrmClient};
pub use config::Config;
pub use dispatch::{ClientState, Dispatcher, ToolReply};
pub use error::{ConfigError, CrmError, CrmResult};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use server::ZohoCrmMcpServer;
pub use tools::{list_tools, CrmRequest, ToolCall, ToolKind};
