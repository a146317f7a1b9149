//! Tool argument types.
//!
//! Each struct is both the deserialization target for a tool's arguments and,
//! through `schemars`, the source of the tool's advertised input schema. Field
//! doc comments become the schema descriptions.

use crate::client::{ListParams, Record, SearchParams};
use crate::domain::{ModuleName, RecordId, SearchCriteria};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetRecordsParams {
    /// CRM module name (e.g., Leads, Contacts, Accounts, Deals)
    #[schemars(with = "String")]
    pub module: ModuleName,

    #[serde(flatten)]
    pub query: ListParams,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecordRefParams {
    /// CRM module name
    #[schemars(with = "String")]
    pub module: ModuleName,

    /// Record ID
    #[schemars(with = "String")]
    pub record_id: RecordId,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateRecordParams {
    /// CRM module name
    #[schemars(with = "String")]
    pub module: ModuleName,

    /// Record data as key-value pairs
    pub data: Record,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateRecordParams {
    /// CRM module name
    #[schemars(with = "String")]
    pub module: ModuleName,

    /// Record ID to update
    #[schemars(with = "String")]
    pub record_id: RecordId,

    /// Updated record data as key-value pairs
    pub data: Record,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchRecordsParams {
    /// CRM module name
    #[schemars(with = "String")]
    pub module: ModuleName,

    /// Search criteria (e.g., 'Email:equals:john@example.com')
    #[schemars(with = "String")]
    pub criteria: SearchCriteria,

    #[serde(flatten)]
    pub query: SearchParams,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchByEmailParams {
    /// CRM module name (usually Contacts or Leads)
    #[schemars(with = "String")]
    pub module: ModuleName,

    /// Email address to search for
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchByPhoneParams {
    /// CRM module name (usually Contacts or Leads)
    #[schemars(with = "String")]
    pub module: ModuleName,

    /// Phone number to search for
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateLeadParams {
    /// Lead's first name
    pub first_name: String,

    /// Lead's last name
    pub last_name: String,

    /// Lead's email address
    #[serde(default)]
    pub email: Option<String>,

    /// Lead's company
    #[serde(default)]
    pub company: Option<String>,

    /// Lead's phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Source of the lead
    #[serde(default)]
    pub lead_source: Option<String>,

    /// Additional custom fields
    #[serde(default)]
    pub additional_fields: Option<Record>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateContactParams {
    /// Contact's first name
    pub first_name: String,

    /// Contact's last name
    pub last_name: String,

    /// Contact's email address
    #[serde(default)]
    pub email: Option<String>,

    /// Associated account name
    #[serde(default)]
    pub account_name: Option<String>,

    /// Contact's phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Additional custom fields
    #[serde(default)]
    pub additional_fields: Option<Record>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateAccountParams {
    /// Account name
    pub account_name: String,

    /// Account website
    #[serde(default)]
    pub website: Option<String>,

    /// Account phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Account industry
    #[serde(default)]
    pub industry: Option<String>,

    /// Additional custom fields
    #[serde(default)]
    pub additional_fields: Option<Record>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ModuleParams {
    /// CRM module name
    #[schemars(with = "String")]
    pub module: ModuleName,
}

/// Arguments of tools that take none. Extra keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Builds a record from convenience fields, CRM field name first.
struct RecordBuilder(Record);

impl RecordBuilder {
    fn new() -> Self {
        Self(Record::new())
    }

    fn field(mut self, crm_name: &str, value: String) -> Self {
        self.0.insert(crm_name.to_string(), Value::String(value));
        self
    }

    fn optional(self, crm_name: &str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.field(crm_name, value),
            None => self,
        }
    }

    /// Merge free-form fields last; they win on collision.
    fn finish(mut self, additional: Option<Record>) -> Record {
        if let Some(additional) = additional {
            self.0.extend(additional);
        }
        self.0
    }
}

impl CreateLeadParams {
    pub fn into_record(self) -> Record {
        RecordBuilder::new()
            .field("First_Name", self.first_name)
            .field("Last_Name", self.last_name)
            .optional("Email", self.email)
            .optional("Company", self.company)
            .optional("Phone", self.phone)
            .optional("Lead_Source", self.lead_source)
            .finish(self.additional_fields)
    }
}

impl CreateContactParams {
    pub fn into_record(self) -> Record {
        RecordBuilder::new()
            .field("First_Name", self.first_name)
            .field("Last_Name", self.last_name)
            .optional("Email", self.email)
            .optional("Account_Name", self.account_name)
            .optional("Phone", self.phone)
            .finish(self.additional_fields)
    }
}

impl CreateAccountParams {
    pub fn into_record(self) -> Record {
        RecordBuilder::new()
            .field("Account_Name", self.account_name)
            .optional("Website", self.website)
            .optional("Phone", self.phone)
            .optional("Industry", self.industry)
            .finish(self.additional_fields)
    }
}
