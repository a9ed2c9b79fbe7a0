//! Authentication models for the ICANN account API.
//!
//! This module contains the login request body and response types.
//! Token state management lives in the `auth` module; this contains
//! only the wire types.

use serde::{Deserialize, Serialize};

/// Login request body for the ICANN account API.
///
/// No Debug derive: the password is borrowed in the clear here and must
/// never reach log output.
#[derive(Serialize)]
pub struct AuthCredentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful authentication response.
///
/// `access_token` defaults to empty so a missing field surfaces as a clear
/// invalid-response error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "accessToken", default)]
    pub access_token: String,
    #[serde(default)]
    pub message: Option<String>,
}
