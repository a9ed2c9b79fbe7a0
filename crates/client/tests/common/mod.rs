//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the CZDS client. All integration tests should use these
//! utilities to ensure consistency.
//!
//! # Invariants
//! - `test_client` points both the CZDS API and the account API at the same
//!   mock server, with the account endpoint under [`AUTH_PATH`]
//! - `mount_auth_success` always issues [`TEST_TOKEN`]
//!
//! # What this does NOT handle
//! - Endpoint-specific mock responses (set those up in the tests themselves)

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

use czds_client::CzdsClient;

pub const TEST_TOKEN: &str = "test-jwt-token";
pub const AUTH_PATH: &str = "/api/authenticate";

/// Build a client whose CZDS and account endpoints both point at the mock
/// server.
pub fn test_client(mock_server: &MockServer) -> CzdsClient {
    CzdsClient::builder()
        .base_url(mock_server.uri())
        .auth_url(format!("{}{}", mock_server.uri(), AUTH_PATH))
        .credentials(
            "reporter@example.org".to_string(),
            SecretString::new("hunter2".to_string().into()),
        )
        .build()
        .expect("client should build against mock server")
}

/// Mount a successful authentication response returning [`TEST_TOKEN`].
#[allow(dead_code)]
pub async fn mount_auth_success(mock_server: &MockServer) {
    Mock::given(wiremock::matchers::method("POST"))
        .and(wiremock::matchers::path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accessToken": TEST_TOKEN,
            "message": "Authentication Successful"
        })))
        .mount(mock_server)
        .await;
}
