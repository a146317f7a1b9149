use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use zoho_crm_mcp_server::client::{AsyncCrmClient, ListParams, Record, SearchParams};
use zoho_crm_mcp_server::domain::{ModuleName, RecordId, SearchCriteria};
use zoho_crm_mcp_server::error::{CrmError, CrmResult};

/// One client operation as the mock saw it.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    ListRecords(String, ListParams),
    GetRecord(String, String),
    CreateRecord(String, Record),
    UpdateRecord(String, String, Record),
    DeleteRecord(String, String),
    SearchRecords(String, String, SearchParams),
    ListModules,
    GetFields(String),
    ListUsers,
    GetOrg,
}

/// Mock CRM client for testing.
///
/// Records every call and answers from a queue of canned results, falling
/// back to `{"data": []}` once the queue is empty.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCrmClient {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    responses: Arc<Mutex<VecDeque<CrmResult<Value>>>>,
}

#[allow(dead_code)]
impl MockCrmClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn respond_with(&self, value: Value) {
        self.responses.lock().unwrap().push_back(Ok(value));
    }

    /// Queue an error response.
    pub fn fail_with(&self, error: CrmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn answer(&self, call: RecordedCall) -> CrmResult<Value> {
        self.calls.lock().unwrap().push(call);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({"data": []})))
    }
}

#[async_trait]
impl AsyncCrmClient for MockCrmClient {
    async fn list_records(&self, module: &ModuleName, params: &ListParams) -> CrmResult<Value> {
        self.answer(RecordedCall::ListRecords(
            module.to_string(),
            params.clone(),
        ))
    }

    async fn get_record(&self, module: &ModuleName, id: &RecordId) -> CrmResult<Value> {
        self.answer(RecordedCall::GetRecord(module.to_string(), id.to_string()))
    }

    async fn create_record(&self, module: &ModuleName, data: &Record) -> CrmResult<Value> {
        self.answer(RecordedCall::CreateRecord(module.to_string(), data.clone()))
    }

    async fn update_record(
        &self,
        module: &ModuleName,
        id: &RecordId,
        data: &Record,
    ) -> CrmResult<Value> {
        self.answer(RecordedCall::UpdateRecord(
            module.to_string(),
            id.to_string(),
            data.clone(),
        ))
    }

    async fn delete_record(&self, module: &ModuleName, id: &RecordId) -> CrmResult<Value> {
        self.answer(RecordedCall::DeleteRecord(module.to_string(), id.to_string()))
    }

    async fn search_records(
        &self,
        module: &ModuleName,
        criteria: &SearchCriteria,
        params: &SearchParams,
    ) -> CrmResult<Value> {
        self.answer(RecordedCall::SearchRecords(
            module.to_string(),
            criteria.to_string(),
            params.clone(),
        ))
    }

    async fn list_modules(&self) -> CrmResult<Value> {
        self.answer(RecordedCall::ListModules)
    }

    async fn get_fields(&self, module: &ModuleName) -> CrmResult<Value> {
        self.answer(RecordedCall::GetFields(module.to_string()))
    }

    async fn list_users(&self) -> CrmResult<Value> {
        self.answer(RecordedCall::ListUsers)
    }

    async fn get_org(&self) -> CrmResult<Value> {
        self.answer(RecordedCall::GetOrg)
    }
}
