//! Error types for the Zoho CRM MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Internal code returns these typed errors; only the dispatcher turns them into text.

use thiserror::Error;

/// Errors that can occur while obtaining credentials or talking to the CRM API.
#[derive(Error, Debug)]
pub enum CrmError {
    /// Required configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The credential broker answered with a non-2xx status
    #[error("Failed to fetch credentials from broker (status {status}): {body}")]
    CredentialFetch { status: u16, body: String },

    /// The credential broker answered without the expected `credentials.access_token`
    #[error("Invalid credentials format from broker: {0}")]
    CredentialFormat(String),

    /// The CRM API returned an error status code
    #[error("API request failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network-level failure (connection refused, DNS, timeout, unreadable body)
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Tool arguments did not match the tool's input schema
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    /// No tool is registered under this name
    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    /// Anything else that went wrong while handling a call
    #[error("{0}")]
    Unexpected(String),
}

impl CrmError {
    /// Whether this error belongs to the CRM/credential family reported with
    /// the `Zoho CRM Error:` prefix.
    pub fn is_crm_error(&self) -> bool {
        matches!(
            self,
            CrmError::Configuration(_)
                | CrmError::CredentialFetch { .. }
                | CrmError::CredentialFormat(_)
                | CrmError::Api { .. }
        )
    }
}

impl From<ConfigError> for CrmError {
    fn from(err: ConfigError) -> Self {
        CrmError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for CrmError {
    fn from(err: serde_json::Error) -> Self {
        CrmError::Unexpected(format!("JSON error: {}", err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CrmError
pub type CrmResult<T> = Result<T, CrmError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CrmError::UnknownTool("get_crm_deals".to_string());
        assert_eq!(err.to_string(), "Unknown tool 'get_crm_deals'");

        let err = ConfigError::MissingVar("NANGO_SECRET_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: NANGO_SECRET_KEY"
        );

        let err = CrmError::CredentialFetch {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("unauthorized"));
    }

    #[test]
    fn test_api_error_variants() {
        let err = CrmError::Api {
            status: 400,
            message: "INVALID_MODULE".to_string(),
        };
        assert_eq!(err.to_string(), "API request failed (400): INVALID_MODULE");
        assert!(err.is_crm_error());
    }

    #[test]
    fn test_config_error_converts_to_configuration() {
        let err: CrmError = ConfigError::MissingVar("NANGO_BASE_URL".to_string()).into();
        assert!(matches!(err, CrmError::Configuration(_)));
        assert!(err.to_string().contains("NANGO_BASE_URL"));
    }

    #[test]
    fn test_generic_errors_are_not_crm_errors() {
        assert!(!CrmError::Transport("connection refused".into()).is_crm_error());
        assert!(!CrmError::UnknownTool("x".into()).is_crm_error());
        assert!(!CrmError::Unexpected("boom".into()).is_crm_error());
    }
}
