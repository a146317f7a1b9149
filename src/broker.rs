//! Credential retrieval from the Nango token broker.
//!
//! The broker owns the OAuth connection to Zoho; this module asks it for the
//! connection's current access token (forcing a refresh) once at startup.

use crate::config::Config;
use crate::error::{CrmError, CrmResult};
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

/// OAuth credentials issued by the broker.
#[derive(Clone)]
pub struct Credentials {
    /// Bearer token for the Zoho API
    pub access_token: String,

    /// Every other field of the broker's `credentials` object (refresh token,
    /// expiry, raw provider payload). Kept opaque.
    pub metadata: Map<String, Value>,
}

impl Credentials {
    /// Credentials holding only an access token.
    pub fn from_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            metadata: Map::new(),
        }
    }

    /// Extract credentials from a broker connection response.
    ///
    /// Expects `{"credentials": {"access_token": "...", ...}, ...}`.
    pub fn from_connection(body: &Value) -> CrmResult<Self> {
        let mut credentials = body
            .get("credentials")
            .and_then(Value::as_object)
            .cloned()
            .ok_or_else(|| {
                CrmError::CredentialFormat("response has no `credentials` object".to_string())
            })?;

        let access_token = match credentials.remove("access_token") {
            Some(Value::String(token)) if !token.trim().is_empty() => token,
            _ => {
                return Err(CrmError::CredentialFormat(
                    "`credentials.access_token` is missing or empty".to_string(),
                ))
            }
        };

        Ok(Self {
            access_token,
            metadata: credentials,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"[REDACTED]")
            .field("metadata_keys", &self.metadata.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Everything needed to ask the broker for a connection's token.
#[derive(Clone)]
pub struct BrokerSettings {
    pub base_url: String,
    pub connection_id: String,
    pub integration_id: String,
    pub secret_key: String,
    pub timeout: Duration,
}

impl BrokerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.broker_url.clone(),
            connection_id: config.connection_id.clone(),
            integration_id: config.integration_id.clone(),
            secret_key: config.broker_secret.clone(),
            timeout: Duration::from_secs(config.request_timeout),
        }
    }

    fn validate(&self) -> CrmResult<()> {
        let fields = [
            ("broker base URL", &self.base_url),
            ("connection id", &self.connection_id),
            ("integration id", &self.integration_id),
            ("broker secret", &self.secret_key),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(CrmError::Configuration(format!("Missing {}", name)));
            }
        }
        Ok(())
    }

    fn connection_url(&self) -> String {
        format!(
            "{}/connection/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.connection_id)
        )
    }
}

impl fmt::Debug for BrokerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrokerSettings")
            .field("base_url", &self.base_url)
            .field("connection_id", &self.connection_id)
            .field("integration_id", &self.integration_id)
            .field("secret_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Fetch the connection's current access token from the broker.
///
/// Issues `GET {base_url}/connection/{connection_id}?provider_config_key={integration_id}&refresh_token=true`
/// authenticated with the broker secret. Blocking; call it from `spawn_blocking`
/// inside a runtime.
pub fn fetch_credentials(settings: &BrokerSettings) -> CrmResult<Credentials> {
    settings.validate()?;

    let url = settings.connection_url();
    tracing::debug!("GET {} (credential fetch)", url);

    let agent = ureq::AgentBuilder::new().timeout(settings.timeout).build();
    let response = agent
        .get(&url)
        .query("provider_config_key", &settings.integration_id)
        .query("refresh_token", "true")
        .set("Authorization", &format!("Bearer {}", settings.secret_key))
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                tracing::warn!("Credential broker returned status {}", status);
                CrmError::CredentialFetch { status, body }
            }
            ureq::Error::Transport(transport) => CrmError::Transport(transport.to_string()),
        })?;

    let body = response
        .into_string()
        .map_err(|e| CrmError::Transport(e.to_string()))?;
    let value: Value = serde_json::from_str(&body)
        .map_err(|e| CrmError::CredentialFormat(format!("response is not JSON: {}", e)))?;

    let credentials = Credentials::from_connection(&value)?;
    tracing::info!(
        "Fetched credentials for connection {}",
        settings.connection_id
    );
    Ok(credentials)
}
