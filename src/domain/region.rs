//! Zoho data-center region.

use super::errors::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Region codes of the Zoho data centers, as used in `www.zohoapis.{region}`.
pub const KNOWN_REGIONS: &[&str] = &["com", "eu", "in", "com.au", "jp", "ca", "com.cn", "sa", "uk"];

/// Region used when `ZOHO_REGION` is not set.
pub const DEFAULT_REGION: &str = "in";

/// A validated Zoho data-center region code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region(String);

impl Region {
    /// Create a region from a code such as `in` or `com.au`.
    ///
    /// Codes are compared case-insensitively and stored lowercase.
    pub fn new(code: &str) -> Result<Self, ValidationError> {
        let code = code.trim().to_ascii_lowercase();
        if KNOWN_REGIONS.contains(&code.as_str()) {
            Ok(Self(code))
        } else {
            Err(ValidationError::UnknownRegion(code))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CRM REST base URL for this region.
    pub fn api_base_url(&self) -> String {
        format!("https://www.zohoapis.{}/crm/v2", self.0)
    }
}

impl Default for Region {
    fn default() -> Self {
        Self(DEFAULT_REGION.to_string())
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::new(s)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
