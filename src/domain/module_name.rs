//! ModuleName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Name of a CRM module (e.g. `Leads`, `Contacts`, `Accounts`, `Deals`).
///
/// Only emptiness is checked locally; whether the module exists is for the
/// remote API to decide.
///
/// # Example
///
/// ```
/// use zoho_crm_mcp_server::domain::ModuleName;
///
/// let module = ModuleName::new("Leads").unwrap();
/// assert_eq!(module.as_str(), "Leads");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    /// Create a new ModuleName, rejecting empty or blank names.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyModule` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyModule);
        }
        Ok(Self(name))
    }

    /// Get the module name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form for use as a URL path segment.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl Serialize for ModuleName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ModuleName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ModuleName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
