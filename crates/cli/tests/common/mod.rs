//! Shared test utilities for czds-status integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide mock-server wiring (endpoint URLs, credentials, auth mock).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default:
//!   no `.env` loading, no CZDS_* leakage from the host environment.

use assert_cmd::Command;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const TEST_USERNAME: &str = "reporter@example.org";
#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "hunter2";
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-jwt-token";
#[allow(dead_code)]
pub const AUTH_PATH: &str = "/api/authenticate";

/// Returns a hermetic `czds-status` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - All CZDS_* env vars are cleared to ensure no leakage from the host.
pub fn czds_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("czds-status");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("CZDS_BASE_URL")
        .env_remove("CZDS_AUTH_URL")
        .env_remove("CZDS_USERNAME")
        .env_remove("CZDS_PASSWORD")
        .env_remove("CZDS_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `czds-status` command pointed at a mock server,
/// with test credentials supplied through the environment.
#[allow(dead_code)]
pub fn czds_cmd_with_server(server: &MockServer) -> Command {
    let mut cmd = czds_cmd();
    cmd.env("CZDS_BASE_URL", server.uri())
        .env("CZDS_AUTH_URL", format!("{}{}", server.uri(), AUTH_PATH))
        .env("CZDS_USERNAME", TEST_USERNAME)
        .env("CZDS_PASSWORD", TEST_PASSWORD);
    cmd
}

/// Mounts a successful authentication endpoint for the test credentials.
#[allow(dead_code)]
pub async fn mount_auth_success(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .and(body_json(serde_json::json!({
            "username": TEST_USERNAME,
            "password": TEST_PASSWORD,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accessToken": TEST_TOKEN,
            "message": "Authentication successful",
        })))
        .mount(server)
        .await;
}
