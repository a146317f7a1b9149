//! Typed tool invocations.
//!
//! `ToolKind` names every tool the server offers. `ToolCall` is one parsed
//! invocation with typed arguments, and `CrmRequest` is the single client
//! operation it shapes into.

use super::params::*;
use crate::client::{ListParams, Record, SearchParams};
use crate::domain::{ModuleName, RecordId, SearchCriteria};
use crate::error::{CrmError, CrmResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Every tool in the catalog, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    GetRecords,
    GetRecord,
    CreateRecord,
    UpdateRecord,
    DeleteRecord,
    SearchRecords,
    SearchByEmail,
    SearchByPhone,
    CreateLead,
    CreateContact,
    CreateAccount,
    GetModules,
    GetFields,
    GetUsers,
    GetOrg,
}

impl ToolKind {
    pub const ALL: [ToolKind; 15] = [
        ToolKind::GetRecords,
        ToolKind::GetRecord,
        ToolKind::CreateRecord,
        ToolKind::UpdateRecord,
        ToolKind::DeleteRecord,
        ToolKind::SearchRecords,
        ToolKind::SearchByEmail,
        ToolKind::SearchByPhone,
        ToolKind::CreateLead,
        ToolKind::CreateContact,
        ToolKind::CreateAccount,
        ToolKind::GetModules,
        ToolKind::GetFields,
        ToolKind::GetUsers,
        ToolKind::GetOrg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::GetRecords => "get_crm_records",
            ToolKind::GetRecord => "get_crm_record",
            ToolKind::CreateRecord => "create_crm_record",
            ToolKind::UpdateRecord => "update_crm_record",
            ToolKind::DeleteRecord => "delete_crm_record",
            ToolKind::SearchRecords => "search_crm_records",
            ToolKind::SearchByEmail => "search_crm_by_email",
            ToolKind::SearchByPhone => "search_crm_by_phone",
            ToolKind::CreateLead => "create_crm_lead",
            ToolKind::CreateContact => "create_crm_contact",
            ToolKind::CreateAccount => "create_crm_account",
            ToolKind::GetModules => "get_crm_modules",
            ToolKind::GetFields => "get_crm_fields",
            ToolKind::GetUsers => "get_crm_users",
            ToolKind::GetOrg => "get_crm_org",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolKind::GetRecords => {
                "Get records from a Zoho CRM module (Leads, Contacts, Accounts, etc.)"
            }
            ToolKind::GetRecord => "Get a specific record by ID from Zoho CRM",
            ToolKind::CreateRecord => "Create a new record in Zoho CRM",
            ToolKind::UpdateRecord => "Update an existing record in Zoho CRM",
            ToolKind::DeleteRecord => "Delete a record from Zoho CRM",
            ToolKind::SearchRecords => "Search records in Zoho CRM using criteria",
            ToolKind::SearchByEmail => "Search CRM records by email address",
            ToolKind::SearchByPhone => "Search CRM records by phone number",
            ToolKind::CreateLead => "Create a new lead in Zoho CRM with common fields",
            ToolKind::CreateContact => "Create a new contact in Zoho CRM with common fields",
            ToolKind::CreateAccount => "Create a new account in Zoho CRM",
            ToolKind::GetModules => "Get list of available CRM modules",
            ToolKind::GetFields => "Get field metadata for a CRM module",
            ToolKind::GetUsers => "Get list of CRM users",
            ToolKind::GetOrg => "Get organization information",
        }
    }
}

/// One tool invocation with typed arguments.
#[derive(Debug, Clone)]
pub enum ToolCall {
    GetRecords(GetRecordsParams),
    GetRecord(RecordRefParams),
    CreateRecord(CreateRecordParams),
    UpdateRecord(UpdateRecordParams),
    DeleteRecord(RecordRefParams),
    SearchRecords(SearchRecordsParams),
    SearchByEmail(SearchByEmailParams),
    SearchByPhone(SearchByPhoneParams),
    CreateLead(CreateLeadParams),
    CreateContact(CreateContactParams),
    CreateAccount(CreateAccountParams),
    GetModules,
    GetFields(ModuleParams),
    GetUsers,
    GetOrg,
}

fn args<P: DeserializeOwned>(kind: ToolKind, arguments: &Map<String, Value>) -> CrmResult<P> {
    serde_json::from_value(Value::Object(arguments.clone())).map_err(|e| {
        CrmError::InvalidArguments {
            tool: kind.name().to_string(),
            reason: e.to_string(),
        }
    })
}

fn limits(kind: ToolKind, check: Result<(), String>) -> CrmResult<()> {
    check.map_err(|reason| CrmError::InvalidArguments {
        tool: kind.name().to_string(),
        reason,
    })
}

impl ToolCall {
    /// Resolve a tool name and decode its arguments.
    ///
    /// Absent arguments are treated as an empty object.
    pub fn parse(name: &str, arguments: Option<&Map<String, Value>>) -> CrmResult<Self> {
        let kind =
            ToolKind::from_name(name).ok_or_else(|| CrmError::UnknownTool(name.to_string()))?;
        let empty = Map::new();
        let arguments = arguments.unwrap_or(&empty);

        let call = match kind {
            ToolKind::GetRecords => {
                let params: GetRecordsParams = args(kind, arguments)?;
                limits(kind, params.query.validate())?;
                ToolCall::GetRecords(params)
            }
            ToolKind::GetRecord => ToolCall::GetRecord(args(kind, arguments)?),
            ToolKind::CreateRecord => ToolCall::CreateRecord(args(kind, arguments)?),
            ToolKind::UpdateRecord => ToolCall::UpdateRecord(args(kind, arguments)?),
            ToolKind::DeleteRecord => ToolCall::DeleteRecord(args(kind, arguments)?),
            ToolKind::SearchRecords => {
                let params: SearchRecordsParams = args(kind, arguments)?;
                limits(kind, params.query.validate())?;
                ToolCall::SearchRecords(params)
            }
            ToolKind::SearchByEmail => ToolCall::SearchByEmail(args(kind, arguments)?),
            ToolKind::SearchByPhone => ToolCall::SearchByPhone(args(kind, arguments)?),
            ToolKind::CreateLead => ToolCall::CreateLead(args(kind, arguments)?),
            ToolKind::CreateContact => ToolCall::CreateContact(args(kind, arguments)?),
            ToolKind::CreateAccount => ToolCall::CreateAccount(args(kind, arguments)?),
            ToolKind::GetModules => {
                let _: NoParams = args(kind, arguments)?;
                ToolCall::GetModules
            }
            ToolKind::GetFields => ToolCall::GetFields(args(kind, arguments)?),
            ToolKind::GetUsers => {
                let _: NoParams = args(kind, arguments)?;
                ToolCall::GetUsers
            }
            ToolKind::GetOrg => {
                let _: NoParams = args(kind, arguments)?;
                ToolCall::GetOrg
            }
        };
        Ok(call)
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            ToolCall::GetRecords(_) => ToolKind::GetRecords,
            ToolCall::GetRecord(_) => ToolKind::GetRecord,
            ToolCall::CreateRecord(_) => ToolKind::CreateRecord,
            ToolCall::UpdateRecord(_) => ToolKind::UpdateRecord,
            ToolCall::DeleteRecord(_) => ToolKind::DeleteRecord,
            ToolCall::SearchRecords(_) => ToolKind::SearchRecords,
            ToolCall::SearchByEmail(_) => ToolKind::SearchByEmail,
            ToolCall::SearchByPhone(_) => ToolKind::SearchByPhone,
            ToolCall::CreateLead(_) => ToolKind::CreateLead,
            ToolCall::CreateContact(_) => ToolKind::CreateContact,
            ToolCall::CreateAccount(_) => ToolKind::CreateAccount,
            ToolCall::GetModules => ToolKind::GetModules,
            ToolCall::GetFields(_) => ToolKind::GetFields,
            ToolCall::GetUsers => ToolKind::GetUsers,
            ToolCall::GetOrg => ToolKind::GetOrg,
        }
    }

    /// Shape the call into the one client operation it performs.
    pub fn into_request(self) -> CrmResult<CrmRequest> {
        let kind = self.kind();
        let request = match self {
            ToolCall::GetRecords(p) => CrmRequest::ListRecords {
                module: p.module,
                params: p.query,
            },
            ToolCall::GetRecord(p) => CrmRequest::GetRecord {
                module: p.module,
                id: p.record_id,
            },
            ToolCall::CreateRecord(p) => CrmRequest::CreateRecord {
                module: p.module,
                data: p.data,
            },
            ToolCall::UpdateRecord(p) => CrmRequest::UpdateRecord {
                module: p.module,
                id: p.record_id,
                data: p.data,
            },
            ToolCall::DeleteRecord(p) => CrmRequest::DeleteRecord {
                module: p.module,
                id: p.record_id,
            },
            ToolCall::SearchRecords(p) => CrmRequest::SearchRecords {
                module: p.module,
                criteria: p.criteria,
                params: p.query,
            },
            ToolCall::SearchByEmail(p) => CrmRequest::SearchRecords {
                module: p.module,
                criteria: equals_criteria(kind, "Email", &p.email)?,
                params: SearchParams::default(),
            },
            ToolCall::SearchByPhone(p) => CrmRequest::SearchRecords {
                module: p.module,
                criteria: equals_criteria(kind, "Phone", &p.phone)?,
                params: SearchParams::default(),
            },
            ToolCall::CreateLead(p) => CrmRequest::CreateRecord {
                module: fixed_module("Leads"),
                data: p.into_record(),
            },
            ToolCall::CreateContact(p) => CrmRequest::CreateRecord {
                module: fixed_module("Contacts"),
                data: p.into_record(),
            },
            ToolCall::CreateAccount(p) => CrmRequest::CreateRecord {
                module: fixed_module("Accounts"),
                data: p.into_record(),
            },
            ToolCall::GetModules => CrmRequest::ListModules,
            ToolCall::GetFields(p) => CrmRequest::GetFields { module: p.module },
            ToolCall::GetUsers => CrmRequest::ListUsers,
            ToolCall::GetOrg => CrmRequest::GetOrg,
        };
        Ok(request)
    }
}

fn equals_criteria(kind: ToolKind, field: &str, value: &str) -> CrmResult<SearchCriteria> {
    SearchCriteria::equals(field, value).map_err(|e| CrmError::InvalidArguments {
        tool: kind.name().to_string(),
        reason: e.to_string(),
    })
}

fn fixed_module(name: &'static str) -> ModuleName {
    ModuleName::new(name).expect("fixed module names are non-empty")
}

/// A single CRM client operation.
#[derive(Debug, Clone, PartialEq)]
pub enum CrmRequest {
    ListRecords {
        module: ModuleName,
        params: ListParams,
    },
    GetRecord {
        module: ModuleName,
        id: RecordId,
    },
    CreateRecord {
        module: ModuleName,
        data: Record,
    },
    UpdateRecord {
        module: ModuleName,
        id: RecordId,
        data: Record,
    },
    DeleteRecord {
        module: ModuleName,
        id: RecordId,
    },
    SearchRecords {
        module: ModuleName,
        criteria: SearchCriteria,
        params: SearchParams,
    },
    ListModules,
    GetFields {
        module: ModuleName,
    },
    ListUsers,
    GetOrg,
}
