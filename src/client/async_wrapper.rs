//! Async wrapper around synchronous ZohoCrmClient.
//!
//! This module provides an async interface to the synchronous ZohoCrmClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::{ListParams, Record, SearchParams, ZohoCrmClient};
use crate::domain::{ModuleName, RecordId, SearchCriteria};
use crate::error::{CrmError, CrmResult};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Async CRM operations.
///
/// This is the seam the dispatcher depends on, so tests can swap in an
/// in-memory backend.
#[async_trait]
pub trait AsyncCrmClient: Send + Sync {
    async fn list_records(&self, module: &ModuleName, params: &ListParams) -> CrmResult<Value>;
    async fn get_record(&self, module: &ModuleName, id: &RecordId) -> CrmResult<Value>;
    async fn create_record(&self, module: &ModuleName, data: &Record) -> CrmResult<Value>;
    async fn update_record(
        &self,
        module: &ModuleName,
        id: &RecordId,
        data: &Record,
    ) -> CrmResult<Value>;
    async fn delete_record(&self, module: &ModuleName, id: &RecordId) -> CrmResult<Value>;
    async fn search_records(
        &self,
        module: &ModuleName,
        criteria: &SearchCriteria,
        params: &SearchParams,
    ) -> CrmResult<Value>;

    async fn list_modules(&self) -> CrmResult<Value>;
    async fn get_fields(&self, module: &ModuleName) -> CrmResult<Value>;
    async fn list_users(&self) -> CrmResult<Value>;
    async fn get_org(&self) -> CrmResult<Value>;
}

/// Async wrapper around synchronous ZohoCrmClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool.
#[derive(Clone)]
pub struct AsyncCrmClientImpl {
    client: Arc<ZohoCrmClient>,
}

impl AsyncCrmClientImpl {
    pub fn new(client: ZohoCrmClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped blocking client (for metrics).
    pub fn inner(&self) -> &ZohoCrmClient {
        &self.client
    }

    async fn run<F>(&self, op: F) -> CrmResult<Value>
    where
        F: FnOnce(&ZohoCrmClient) -> CrmResult<Value> + Send + 'static,
    {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || op(&client))
            .await
            .map_err(|e| CrmError::Unexpected(format!("Task join error: {}", e)))?
    }
}

#[async_trait]
impl AsyncCrmClient for AsyncCrmClientImpl {
    async fn list_records(&self, module: &ModuleName, params: &ListParams) -> CrmResult<Value> {
        let module = module.clone();
        let params = params.clone();
        self.run(move |client| client.list_records(&module, &params))
            .await
    }

    async fn get_record(&self, module: &ModuleName, id: &RecordId) -> CrmResult<Value> {
        let module = module.clone();
        let id = id.clone();
        self.run(move |client| client.get_record(&module, &id)).await
    }

    async fn create_record(&self, module: &ModuleName, data: &Record) -> CrmResult<Value> {
        let module = module.clone();
        let data = data.clone();
        self.run(move |client| client.create_record(&module, &data))
            .await
    }

    async fn update_record(
        &self,
        module: &ModuleName,
        id: &RecordId,
        data: &Record,
    ) -> CrmResult<Value> {
        let module = module.clone();
        let id = id.clone();
        let data = data.clone();
        self.run(move |client| client.update_record(&module, &id, &data))
            .await
    }

    async fn delete_record(&self, module: &ModuleName, id: &RecordId) -> CrmResult<Value> {
        let module = module.clone();
        let id = id.clone();
        self.run(move |client| client.delete_record(&module, &id))
            .await
    }

    async fn search_records(
        &self,
        module: &ModuleName,
        criteria: &SearchCriteria,
        params: &SearchParams,
    ) -> CrmResult<Value> {
        let module = module.clone();
        let criteria = criteria.clone();
        let params = params.clone();
        self.run(move |client| client.search_records(&module, &criteria, &params))
            .await
    }

    async fn list_modules(&self) -> CrmResult<Value> {
        self.run(|client| client.list_modules()).await
    }

    async fn get_fields(&self, module: &ModuleName) -> CrmResult<Value> {
        let module = module.clone();
        self.run(move |client| client.get_fields(&module)).await
    }

    async fn list_users(&self) -> CrmResult<Value> {
        self.run(|client| client.list_users()).await
    }

    async fn get_org(&self) -> CrmResult<Value> {
        self.run(|client| client.get_org()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::Credentials;

    #[tokio::test]
    async fn test_async_client_creation() {
        let client = ZohoCrmClient::with_base_url(
            "https://www.zohoapis.in/crm/v2".to_string(),
            Credentials::from_token("tok"),
        );
        let async_client = AsyncCrmClientImpl::new(client);

        let cloned = async_client.clone();
        assert_eq!(cloned.inner().base_url(), "https://www.zohoapis.in/crm/v2");
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client = ZohoCrmClient::with_base_url(
            "http://127.0.0.1:9".to_string(),
            Credentials::from_token("tok"),
        );
        let async_client = AsyncCrmClientImpl::new(client);

        let result = async_client.get_org().await;
        assert!(matches!(result, Err(CrmError::Transport(_))));
        assert_eq!(async_client.inner().metrics().http_errors_total(), 1);
    }
}
