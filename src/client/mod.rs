//! HTTP client for the Zoho CRM REST API (v2).
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Every operation issues exactly one authenticated
//! request and hands back the response body as plain JSON.

mod async_wrapper;
pub mod query;

pub use async_wrapper::{AsyncCrmClient, AsyncCrmClientImpl};
pub use query::{ListParams, SearchParams, SortOrder};

use crate::broker::Credentials;
use crate::domain::{ModuleName, RecordId, Region, SearchCriteria};
use crate::error::{CrmError, CrmResult};
use crate::metrics::{HttpTimer, Metrics};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::Duration;

/// A CRM record: field name to arbitrary JSON value.
pub type Record = Map<String, Value>;

/// HTTP client for one Zoho CRM data center.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ZohoCrmClient {
    /// Base URL, e.g. `https://www.zohoapis.in/crm/v2`
    base_url: String,

    /// OAuth access token from the broker
    access_token: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ZohoCrmClient {
    /// Create a client for a region's API host.
    pub fn new(region: &Region, credentials: Credentials, timeout: Duration) -> Self {
        Self::build(region.api_base_url(), credentials, timeout)
    }

    /// Create a ZohoCrmClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, credentials: Credentials) -> Self {
        Self::build(base_url, credentials, Duration::from_secs(10))
    }

    fn build(base_url: String, credentials: Credentials, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            access_token: credentials.access_token,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute one authenticated request and normalize the outcome.
    fn request(&self, method: &str, path: &str, body: Option<&Value>) -> CrmResult<Value> {
        let url = self.build_url(path);
        tracing::debug!("{} {}", method, url);

        let timer = HttpTimer::new(self.metrics.clone());
        let request = self
            .agent
            .request(method, &url)
            .set(
                "Authorization",
                &format!("Zoho-oauthtoken {}", self.access_token),
            )
            .set("Content-Type", "application/json");

        let result = match body {
            Some(body) => request.send_json(body),
            None => request.call(),
        };

        match result {
            Ok(response) => {
                timer.complete();
                let status = response.status();
                let text = response
                    .into_string()
                    .map_err(|e| CrmError::Transport(e.to_string()))?;
                tracing::debug!("{} {} - Success (status: {})", method, url, status);
                Ok(self.parse_success(text))
            }
            Err(e) => {
                timer.complete_with_error();
                let err = Self::map_error(e);
                tracing::warn!("{} {} - Error: {}", method, url, err);
                Err(err)
            }
        }
    }

    /// Parse a 2xx body, falling back to `{"raw_response": text}` for non-JSON bodies.
    fn parse_success(&self, text: String) -> Value {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            Err(_) => {
                self.metrics.record_raw_response();
                json!({ "raw_response": text })
            }
        }
    }

    /// Map a ureq error to a CrmError.
    fn map_error(error: ureq::Error) -> CrmError {
        match error {
            ureq::Error::Status(status, response) => {
                let text = response.into_string().unwrap_or_default();
                CrmError::Api {
                    status,
                    message: Self::error_message(&text),
                }
            }
            ureq::Error::Transport(transport) => CrmError::Transport(transport.to_string()),
        }
    }

    /// Prefer the `message` field of a JSON error body, else the raw text.
    fn error_message(text: &str) -> String {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => match value.get("message") {
                Some(Value::String(message)) => message.clone(),
                Some(other) => other.to_string(),
                None => text.to_string(),
            },
            Err(_) => text.to_string(),
        }
    }

    fn record_path(module: &ModuleName, id: &RecordId) -> String {
        format!("{}/{}", module.path_segment(), id.path_segment())
    }

    fn data_envelope(data: &Record) -> Value {
        json!({ "data": [data] })
    }

    // ========================= Record Operations =========================

    /// List records of a module.
    pub fn list_records(&self, module: &ModuleName, params: &ListParams) -> CrmResult<Value> {
        let path = query::with_query(&module.path_segment(), &params.to_pairs());
        self.request("GET", &path, None)
    }

    /// Get a single record by ID.
    pub fn get_record(&self, module: &ModuleName, id: &RecordId) -> CrmResult<Value> {
        self.request("GET", &Self::record_path(module, id), None)
    }

    /// Create a record; the body is `{"data": [data]}`.
    pub fn create_record(&self, module: &ModuleName, data: &Record) -> CrmResult<Value> {
        let body = Self::data_envelope(data);
        self.request("POST", &module.path_segment(), Some(&body))
    }

    /// Update a record; the body is `{"data": [data]}`.
    pub fn update_record(
        &self,
        module: &ModuleName,
        id: &RecordId,
        data: &Record,
    ) -> CrmResult<Value> {
        let body = Self::data_envelope(data);
        self.request("PUT", &Self::record_path(module, id), Some(&body))
    }

    /// Delete a record.
    pub fn delete_record(&self, module: &ModuleName, id: &RecordId) -> CrmResult<Value> {
        self.request("DELETE", &Self::record_path(module, id), None)
    }

    /// Search records with a criteria expression.
    pub fn search_records(
        &self,
        module: &ModuleName,
        criteria: &SearchCriteria,
        params: &SearchParams,
    ) -> CrmResult<Value> {
        let mut pairs = vec![("criteria", criteria.as_str().to_string())];
        pairs.extend(params.to_pairs());
        let path = query::with_query(&format!("{}/search", module.path_segment()), &pairs);
        self.request("GET", &path, None)
    }

    // ========================= Metadata Operations =========================

    /// List available modules. Returns the `modules` array, or `[]` if absent.
    pub fn list_modules(&self) -> CrmResult<Value> {
        let response = self.request("GET", "settings/modules", None)?;
        Ok(match response {
            Value::Object(mut map) => map.remove("modules").unwrap_or_else(|| json!([])),
            _ => json!([]),
        })
    }

    /// Field metadata for a module.
    pub fn get_fields(&self, module: &ModuleName) -> CrmResult<Value> {
        let path = query::with_query(
            "settings/fields",
            &[("module", module.as_str().to_string())],
        );
        self.request("GET", &path, None)
    }

    /// List CRM users.
    pub fn list_users(&self) -> CrmResult<Value> {
        self.request("GET", "users", None)
    }

    /// Organization details.
    pub fn get_org(&self) -> CrmResult<Value> {
        self.request("GET", "org", None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ZohoCrmClient {
        ZohoCrmClient::with_base_url(base.to_string(), Credentials::from_token("tok"))
    }

    #[test]
    fn test_build_url() {
        let client = client("https://www.zohoapis.in/crm/v2");
        assert_eq!(
            client.build_url("Leads/123"),
            "https://www.zohoapis.in/crm/v2/Leads/123"
        );
        assert_eq!(
            client.build_url("/settings/modules"),
            "https://www.zohoapis.in/crm/v2/settings/modules"
        );

        let with_slash = self::client("https://www.zohoapis.in/crm/v2/");
        assert_eq!(with_slash.build_url("org"), "https://www.zohoapis.in/crm/v2/org");
    }

    #[test]
    fn test_client_for_region() {
        let region = Region::new("eu").unwrap();
        let client = ZohoCrmClient::new(&region, Credentials::from_token("tok"), Duration::from_secs(5));
        assert_eq!(client.base_url(), "https://www.zohoapis.eu/crm/v2");
    }

    #[test]
    fn test_error_message_prefers_json_message() {
        assert_eq!(
            ZohoCrmClient::error_message(r#"{"code":"INVALID_MODULE","message":"INVALID_MODULE"}"#),
            "INVALID_MODULE"
        );
        assert_eq!(
            ZohoCrmClient::error_message(r#"{"code":"OAUTH_SCOPE_MISMATCH"}"#),
            r#"{"code":"OAUTH_SCOPE_MISMATCH"}"#
        );
        assert_eq!(ZohoCrmClient::error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_parse_success_falls_back_to_raw() {
        let client = client("http://localhost");
        assert_eq!(client.parse_success(String::new()), json!({"raw_response": ""}));
        assert_eq!(client.parse_success("{\"ok\":true}".into()), json!({"ok": true}));
        assert_eq!(client.metrics().raw_responses_total(), 1);
    }

    #[test]
    fn test_data_envelope_wraps_once() {
        let mut data = Record::new();
        data.insert("Last_Name".into(), json!("Doe"));
        data.insert("data".into(), json!([{"nested": true}]));
        assert_eq!(
            ZohoCrmClient::data_envelope(&data),
            json!({"data": [{"Last_Name": "Doe", "data": [{"nested": true}]}]})
        );
    }
}
