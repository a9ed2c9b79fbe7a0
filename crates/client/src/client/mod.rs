//! Main CZDS REST API client.
//!
//! This module provides the primary [`CzdsClient`] for interacting with the
//! ICANN Centralized Zone Data Service.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `requests`: Zone-request retrieval methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Credential and token storage (delegated to `AuthState` in `auth.rs`)
//!
//! # Invariants
//! - `authenticate` is the only method that mutates the client; it installs
//!   the bearer token exactly once per process. Every retrieval method takes
//!   `&self` and reuses that token.
//! - Fetch methods called before `authenticate` fail with
//!   [`crate::error::ClientError::NotAuthenticated`] instead of sending an
//!   unauthenticated request.

pub mod builder;
mod requests;

use secrecy::ExposeSecret;

use crate::auth::AuthState;
use crate::endpoints;
use crate::error::Result;

/// CZDS REST API client.
///
/// Construct with [`CzdsClient::builder()`], then call
/// [`authenticate`](CzdsClient::authenticate) once before any retrieval
/// method:
///
/// ```rust,ignore
/// use czds_client::CzdsClient;
/// use secrecy::SecretString;
///
/// let mut client = CzdsClient::builder()
///     .credentials(
///         "user@example.org".to_string(),
///         SecretString::new("secret".to_string().into()),
///     )
///     .build()?;
/// client.authenticate().await?;
/// let requests = client.all_requests(czds_client::RequestStatus::All).await?;
/// ```
#[derive(Debug)]
pub struct CzdsClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth_url: String,
    pub(crate) auth: AuthState,
}

impl CzdsClient {
    /// Create a new client builder.
    pub fn builder() -> builder::CzdsClientBuilder {
        builder::CzdsClientBuilder::new()
    }

    /// Get the CZDS API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the ICANN account authentication URL.
    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    /// Whether a bearer token has been installed.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Authenticate against the ICANN account API and install the returned
    /// JWT bearer token for subsequent calls.
    pub async fn authenticate(&mut self) -> Result<()> {
        let token = endpoints::authenticate(
            &self.http,
            &self.auth_url,
            self.auth.username(),
            self.auth.password().expose_secret(),
        )
        .await?;
        self.auth.install_token(token);
        Ok(())
    }
}
