//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided module name is empty.
    EmptyModule,

    /// The provided record ID is empty.
    EmptyId,

    /// A search criteria component is empty.
    EmptyCriteria,

    /// The region code is not a known data center.
    UnknownRegion(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyModule => write!(f, "Module name cannot be empty"),
            Self::EmptyId => write!(f, "Record ID cannot be empty"),
            Self::EmptyCriteria => write!(f, "Search criteria cannot be empty"),
            Self::UnknownRegion(region) => write!(
                f,
                "Unknown Zoho region '{}' (expected one of: {})",
                region,
                super::region::KNOWN_REGIONS.join(", ")
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
