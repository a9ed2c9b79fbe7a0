//! Configuration loading and layering.
//!
//! Responsibilities:
//! - Load `.env` files before flag parsing (skippable via `DOTENV_DISABLED`).
//! - Apply `CZDS_*` environment variables (trimmed; empty treated as unset).
//! - Apply explicit overrides from the command line (highest priority).
//! - Validate and assemble the final immutable [`Config`].
//!
//! Does NOT handle:
//! - Flag parsing (cli crate).
//! - Credential storage beyond process lifetime.
//!
//! Invariants:
//! - Explicit `with_*` overrides win over environment variables.
//! - A missing username or password fails `build()`, never later.
//! - `load_dotenv()` must be called before flag parsing for `.env` values to
//!   reach clap env defaults.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::constants::{
    DEFAULT_AUTH_URL, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
};
use crate::error::ConfigError;
use crate::types::{Config, ConnectionConfig, Credentials};

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Configuration loader that builds a [`Config`] from environment variables
/// and explicit overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    auth_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file from the working directory if one exists.
    ///
    /// Honors `DOTENV_DISABLED`: when set (to anything non-empty), `.env`
    /// loading is skipped entirely. A missing `.env` file is not an error.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if env_var_or_none("DOTENV_DISABLED").is_some() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!("loaded environment from {}", path.display());
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Apply `CZDS_*` environment variables.
    ///
    /// Values already applied are overwritten; call this before the `with_*`
    /// overrides so command-line flags keep the last word.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if let Some(url) = env_var_or_none("CZDS_BASE_URL") {
            self.base_url = Some(url);
        }
        if let Some(url) = env_var_or_none("CZDS_AUTH_URL") {
            self.auth_url = Some(url);
        }
        if let Some(username) = env_var_or_none("CZDS_USERNAME") {
            self.username = Some(username);
        }
        if let Some(password) = env_var_or_none("CZDS_PASSWORD") {
            self.password = Some(SecretString::new(password.into()));
        }
        if let Some(timeout) = env_var_or_none("CZDS_TIMEOUT") {
            let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                var: "CZDS_TIMEOUT".to_string(),
                message: "must be a number of seconds".to_string(),
            })?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        Ok(self)
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn with_auth_url(mut self, url: String) -> Self {
        self.auth_url = Some(url);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate and assemble the final [`Config`].
    ///
    /// Credentials are required; endpoint URLs and the timeout fall back to
    /// their production defaults.
    pub fn build(self) -> Result<Config, ConfigError> {
        let username = self
            .username
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingUsername)?;
        let password = self
            .password
            .filter(|p| !p.expose_secret().trim().is_empty())
            .ok_or(ConfigError::MissingPassword)?;

        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let auth_url = self.auth_url.unwrap_or_else(|| DEFAULT_AUTH_URL.to_string());
        validate_endpoint_url(&base_url)?;
        validate_endpoint_url(&auth_url)?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() || timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidValue {
                var: "timeout".to_string(),
                message: format!("must be between 1 and {} seconds", MAX_TIMEOUT_SECS),
            });
        }

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                auth_url,
                timeout,
            },
            credentials: Credentials { username, password },
        })
    }
}

/// Endpoint URLs must parse and use an http(s) scheme.
fn validate_endpoint_url(value: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        url: value.to_string(),
        message: e.to_string(),
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidUrl {
            url: value.to_string(),
            message: "scheme must be http or https".to_string(),
        });
    }
    Ok(())
}
