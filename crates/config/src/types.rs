//! Configuration types for the CZDS status tool.
//!
//! Responsibilities:
//! - Define connection settings (endpoint URLs, request timeout).
//! - Define the credential pair used against the authentication endpoint.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env/.env (see `loader` module).
//! - Network connections (see the client crate).
//!
//! Invariants:
//! - Duration fields are serialized as seconds (integers).
//! - The password is held as a [`SecretString`] and never appears in
//!   `Debug` output.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEFAULT_AUTH_URL, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection settings for the CZDS endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the CZDS REST API (e.g. https://czds-api.icann.org)
    pub base_url: String,
    /// URL of the ICANN account authentication endpoint
    pub auth_url: String,
    /// HTTP request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Username and secret presented to the authentication endpoint.
///
/// The password is wrapped in [`SecretString`] so it is redacted from
/// `Debug` output and can never end up in a log line by accident.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Account credentials
    pub credentials: Credentials,
}
