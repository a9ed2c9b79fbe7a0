//! Client builder for constructing [`CzdsClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (credentials, non-empty URLs)
//! - Normalizing endpoint URLs (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`CzdsClient`] methods)
//! - Bearer-token state (handled by `AuthState` in `auth.rs`)
//!
//! # Invariants
//! - Credentials are required and must be provided before calling `build()`
//! - Endpoint URLs are always normalized to have no trailing slashes

use std::time::Duration;

use secrecy::SecretString;

use czds_config::Config;
use czds_config::constants::{DEFAULT_AUTH_URL, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use crate::auth::AuthState;
use crate::client::CzdsClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`CzdsClient`].
///
/// Endpoint URLs and the timeout default to the production CZDS values;
/// credentials are required.
pub struct CzdsClientBuilder {
    base_url: String,
    auth_url: String,
    username: Option<String>,
    password: Option<SecretString>,
    timeout: Duration,
}

impl Default for CzdsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            username: None,
            password: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CzdsClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CZDS API base URL.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the ICANN account authentication URL.
    pub fn auth_url(mut self, url: String) -> Self {
        self.auth_url = url;
        self
    }

    /// Set the account credentials.
    pub fn credentials(mut self, username: String, password: SecretString) -> Self {
        self.username = Some(username);
        self.password = Some(password);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.connection.base_url.clone();
        self.auth_url = config.connection.auth_url.clone();
        self.timeout = config.connection.timeout;
        self.username = Some(config.credentials.username.clone());
        self.password = Some(config.credentials.password.clone());
        self
    }

    /// Normalize a URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`CzdsClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if credentials were not provided.
    /// Returns [`ClientError::InvalidUrl`] if either URL is empty.
    /// Returns [`ClientError::HttpError`] if the HTTP client fails to build.
    pub fn build(self) -> Result<CzdsClient> {
        let username = self
            .username
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;
        let password = self
            .password
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let base_url = Self::normalize_url(self.base_url);
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is required".to_string()));
        }
        let auth_url = Self::normalize_url(self.auth_url);
        if auth_url.is_empty() {
            return Err(ClientError::InvalidUrl("auth_url is required".to_string()));
        }

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(CzdsClient {
            http,
            base_url,
            auth_url,
            auth: AuthState::new(username, password),
        })
    }
}
