//! Regression tests for hermetic test isolation around dotenv loading.
//!
//! Responsibilities:
//! - Prove that setting `DOTENV_DISABLED=1` prevents the CLI from loading
//!   `.env`.
//! - Prove that when not disabled, the CLI loads `.env` from the working
//!   directory and the values feed the normal configuration layering.
//!
//! Invariants / assumptions:
//! - The CLI loads dotenv before clap parsing (so clap `env = "..."` can
//!   read `.env` values).
//! - `ConfigLoader::load_dotenv()` is gated by `DOTENV_DISABLED`.

mod common;

use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_dotenv_disabled_ignores_env_file() {
    let temp_dir = TempDir::new().unwrap();

    // If dotenv were loaded, this would provide complete credentials.
    fs::write(
        temp_dir.path().join(".env"),
        "CZDS_USERNAME=reporter@example.org\nCZDS_PASSWORD=hunter2\n",
    )
    .unwrap();

    let mut cmd = czds_cmd();
    cmd.current_dir(temp_dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must pass username"));
}

#[tokio::test]
async fn test_dotenv_enabled_loads_env_file() {
    let server = MockServer::start().await;
    mount_auth_success(&server).await;

    Mock::given(method("POST"))
        .and(path("/czds/requests/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "requests": [],
            "totalRequests": 0
        })))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        format!(
            "CZDS_BASE_URL={uri}\nCZDS_AUTH_URL={uri}{auth}\nCZDS_USERNAME={user}\nCZDS_PASSWORD={pass}\n",
            uri = server.uri(),
            auth = AUTH_PATH,
            user = TEST_USERNAME,
            pass = TEST_PASSWORD,
        ),
    )
    .unwrap();

    let mut cmd = czds_cmd();
    cmd.current_dir(temp_dir.path());
    cmd.env_remove("DOTENV_DISABLED");
    cmd.assert().success().stdout("");
}
