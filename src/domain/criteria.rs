//! Search criteria in the `Field:operator:value` mini-grammar.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A search filter expression such as `Email:equals:john@example.com`.
///
/// The string is forwarded to the CRM untouched; compound expressions like
/// `((Last_Name:equals:Burns)and(First_Name:starts_with:B))` are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria(String);

impl SearchCriteria {
    /// Wrap a raw criteria string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyCriteria` if the string is blank.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyCriteria);
        }
        Ok(Self(raw))
    }

    /// Build `{field}:equals:{value}`.
    pub fn equals(field: &str, value: &str) -> Result<Self, ValidationError> {
        if field.is_empty() || value.is_empty() {
            return Err(ValidationError::EmptyCriteria);
        }
        Ok(Self(format!("{}:equals:{}", field, value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for SearchCriteria {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SearchCriteria {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SearchCriteria::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for SearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_builds_criteria() {
        let criteria = SearchCriteria::equals("Email", "a@b.com").unwrap();
        assert_eq!(criteria.as_str(), "Email:equals:a@b.com");
    }

    #[test]
    fn test_equals_rejects_empty_value() {
        assert_eq!(
            SearchCriteria::equals("Phone", ""),
            Err(ValidationError::EmptyCriteria)
        );
    }

    #[test]
    fn test_raw_criteria_passes_through() {
        let raw = "((Last_Name:equals:Burns)and(First_Name:starts_with:B))";
        assert_eq!(SearchCriteria::new(raw).unwrap().as_str(), raw);
        assert!(SearchCriteria::new("  ").is_err());
    }
}
