//! The static tool catalog advertised through `tools/list`.

use super::call::ToolKind;
use super::params::*;
use once_cell::sync::Lazy;
use rmcp::model::{JsonObject, Tool};
use schemars::generate::SchemaSettings;
use schemars::JsonSchema;
use serde_json::Value;
use std::sync::Arc;

static CATALOG: Lazy<Vec<Tool>> = Lazy::new(|| {
    ToolKind::ALL
        .iter()
        .map(|kind| Tool::new(kind.name(), kind.description(), input_schema(*kind)))
        .collect()
});

/// All tools, in catalog order. Built once per process.
pub fn list_tools() -> &'static [Tool] {
    &CATALOG
}

/// Input schema for one tool.
pub fn input_schema(kind: ToolKind) -> Arc<JsonObject> {
    match kind {
        ToolKind::GetRecords => schema_for::<GetRecordsParams>(),
        ToolKind::GetRecord | ToolKind::DeleteRecord => schema_for::<RecordRefParams>(),
        ToolKind::CreateRecord => schema_for::<CreateRecordParams>(),
        ToolKind::UpdateRecord => schema_for::<UpdateRecordParams>(),
        ToolKind::SearchRecords => schema_for::<SearchRecordsParams>(),
        ToolKind::SearchByEmail => schema_for::<SearchByEmailParams>(),
        ToolKind::SearchByPhone => schema_for::<SearchByPhoneParams>(),
        ToolKind::CreateLead => schema_for::<CreateLeadParams>(),
        ToolKind::CreateContact => schema_for::<CreateContactParams>(),
        ToolKind::CreateAccount => schema_for::<CreateAccountParams>(),
        ToolKind::GetFields => schema_for::<ModuleParams>(),
        ToolKind::GetModules | ToolKind::GetUsers | ToolKind::GetOrg => {
            schema_for::<NoParams>()
        }
    }
}

/// Inline JSON schema of `T` as an object with `type` and `properties`.
fn schema_for<T: JsonSchema>() -> Arc<JsonObject> {
    let generator = SchemaSettings::draft07()
        .with(|s| s.inline_subschemas = true)
        .into_generator();
    let schema = generator.into_root_schema_for::<T>();

    let mut object = match serde_json::to_value(&schema) {
        Ok(Value::Object(object)) => object,
        _ => JsonObject::new(),
    };
    object.remove("$schema");
    object.remove("title");
    object
        .entry("type")
        .or_insert_with(|| Value::String("object".to_string()));
    object
        .entry("properties")
        .or_insert_with(|| Value::Object(JsonObject::new()));
    Arc::new(object)
}
