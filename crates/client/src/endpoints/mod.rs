//! REST API endpoint implementations.
//!
//! Free functions over a plain `reqwest::Client`; the [`crate::CzdsClient`]
//! methods supply base URLs and the bearer token. Non-success responses are
//! converted to [`ClientError::ApiError`] here so every endpoint reports
//! failures the same way.

mod auth;
mod requests;

pub use auth::authenticate;
pub use requests::{get_request_info, list_requests};

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Error body shape used across the CZDS API.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// Pull the `message` field out of a CZDS JSON error body, if it has one.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .map(|m| m.message)
}

/// Convert a non-success response into [`ClientError::ApiError`], keeping
/// the CZDS `message` body field when the body parses as JSON and the raw
/// body otherwise.
pub(crate) async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match extract_message(&body) {
        Some(message) => message,
        None if body.trim().is_empty() => format!("HTTP {status}"),
        None => body,
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
