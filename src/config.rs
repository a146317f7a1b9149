//! Configuration management for the Zoho CRM MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the .env
//! file with `dotenvy`, which never prints.

use crate::domain::region::DEFAULT_REGION;
use crate::domain::Region;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the Zoho CRM MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Nango connection ID
    pub connection_id: String,

    /// Nango integration ID (sent as `provider_config_key`)
    pub integration_id: String,

    /// Nango API base URL
    pub broker_url: String,

    /// Nango secret key
    pub broker_secret: String,

    /// Zoho data-center region (default: "in")
    pub region: Region,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `NANGO_CONNECTION_ID`: Connection whose token is fetched
    /// - `NANGO_INTEGRATION_ID`: Integration (provider config key)
    /// - `NANGO_BASE_URL`: Base URL of the Nango API
    /// - `NANGO_SECRET_KEY`: Nango secret key
    ///
    /// Optional environment variables:
    /// - `ZOHO_REGION`: Data-center region code (default: "in")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 30)
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let connection_id = Self::required("NANGO_CONNECTION_ID")?;
        let integration_id = Self::required("NANGO_INTEGRATION_ID")?;
        let broker_url = Self::required("NANGO_BASE_URL")?;
        let broker_secret = Self::required("NANGO_SECRET_KEY")?;

        if !broker_url.starts_with("http://") && !broker_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "NANGO_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let region_code = env::var("ZOHO_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let region = Region::new(&region_code).map_err(|e| ConfigError::InvalidValue {
            var: "ZOHO_REGION".to_string(),
            reason: e.to_string(),
        })?;

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 30)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        Ok(Config {
            connection_id,
            integration_id,
            broker_url,
            broker_secret,
            region,
            request_timeout,
        })
    }

    /// Read a required variable, treating blank values as missing.
    fn required(var_name: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if !val.trim().is_empty() => Ok(val.trim().to_string()),
            Ok(_) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Err(_) => Err(ConfigError::MissingVar(var_name.to_string())),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            connection_id: String::new(),
            integration_id: String::new(),
            broker_url: String::new(),
            broker_secret: String::new(),
            region: Region::default(),
            request_timeout: 30,
        }
    }
}
