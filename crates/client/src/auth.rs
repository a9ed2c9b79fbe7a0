//! Credential and bearer-token state.
//!
//! Responsibilities:
//! - Hold the account credentials supplied at construction.
//! - Hold the JWT bearer token installed by a successful authenticate call.
//! - Guard fetch operations against running without a token.
//!
//! Does NOT handle:
//! - The authentication HTTP exchange itself (see [`crate::endpoints::auth`]).
//! - Token refresh; a token lives for the process lifetime.
//!
//! Invariants:
//! - Credentials and token are never logged and never appear in Debug output
//!   (`SecretString` redacts itself).

use secrecy::SecretString;

use crate::error::{ClientError, Result};

/// Authentication state for a [`crate::CzdsClient`].
///
/// The token starts empty and is installed exactly once per process by
/// `CzdsClient::authenticate`; every later access is read-only.
#[derive(Debug)]
pub(crate) struct AuthState {
    username: String,
    password: SecretString,
    token: Option<SecretString>,
}

impl AuthState {
    pub(crate) fn new(username: String, password: SecretString) -> Self {
        Self {
            username,
            password,
            token: None,
        }
    }

    pub(crate) fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &SecretString {
        &self.password
    }

    /// Store the bearer token returned by the authentication endpoint.
    pub(crate) fn install_token(&mut self, token: SecretString) {
        self.token = Some(token);
    }

    /// Get the installed bearer token, or [`ClientError::NotAuthenticated`]
    /// if `authenticate` has not run yet.
    pub(crate) fn bearer_token(&self) -> Result<&SecretString> {
        self.token.as_ref().ok_or(ClientError::NotAuthenticated)
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
