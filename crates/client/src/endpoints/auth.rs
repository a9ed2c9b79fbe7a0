//! Authentication endpoint.

use reqwest::Client;
use secrecy::SecretString;
use tracing::debug;

use crate::endpoints::{error_for_status, extract_message};
use crate::error::{ClientError, Result};
use crate::models::{AuthCredentials, AuthResponse};

/// Authenticate against the ICANN account API and return the JWT bearer
/// token to present on subsequent CZDS calls.
///
/// The account API answers 404 as well as 401 for bad credentials; both map
/// to [`ClientError::AuthFailed`].
pub async fn authenticate(
    client: &Client,
    auth_url: &str,
    username: &str,
    password: &str,
) -> Result<SecretString> {
    debug!("Authenticating to {}", auth_url);

    let response = client
        .post(auth_url)
        .json(&AuthCredentials { username, password })
        .send()
        .await?;

    let status = response.status().as_u16();
    if status == 401 || status == 404 {
        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body)
            .unwrap_or_else(|| "invalid username or password".to_string());
        return Err(ClientError::AuthFailed(message));
    }

    let response = error_for_status(response).await?;
    let auth: AuthResponse = response.json().await?;
    if auth.access_token.is_empty() {
        return Err(ClientError::InvalidResponse(
            "Missing accessToken in response".to_string(),
        ));
    }
    Ok(SecretString::new(auth.access_token.into()))
}
