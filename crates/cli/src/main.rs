//! czds-status - report the status of CZDS zone file access requests.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Assemble configuration and construct the CZDS client.
//! - Drive the authenticate/resolve/fetch/render pipeline and map its
//!   outcome to the process exit status.
//!
//! Does NOT handle:
//! - REST API details or response models (see `crates/client`).
//! - Configuration layering rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap env defaults.
//! - Report content is the only thing written to stdout; diagnostics and
//!   errors go to stderr.
//! - Exit status is 0 on success (including `--version`) and 1 on any
//!   failure.

mod args;
mod error;
mod format;
mod report;
mod resolver;
mod selector;

use clap::{CommandFactory, Parser};
use secrecy::SecretString;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use czds_client::CzdsClient;
use czds_config::ConfigLoader;

use args::Cli;
use error::ExitCode;
use selector::RequestSelector;

/// Print a configuration error plus the usage line, then exit.
fn usage_error(err: impl std::fmt::Display) -> ! {
    eprintln!("{err}");
    eprintln!("{}", Cli::command().render_usage());
    std::process::exit(ExitCode::GeneralError.as_i32());
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    // An explicit RUST_LOG wins; --verbose otherwise enables debug
    // diagnostics for this tool and its client library.
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("czds_status=debug,czds_client=debug"))
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let selector = match RequestSelector::from_flags(cli.id.as_deref(), cli.zone.as_deref()) {
        Ok(selector) => selector,
        Err(e) => usage_error(e),
    };

    let mut loader = match ConfigLoader::new().from_env() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to load configuration from environment: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    // Apply CLI overrides (highest priority)
    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref url) = cli.auth_url {
        loader = loader.with_auth_url(url.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(SecretString::new(password.clone().into()));
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }

    let config = match loader.build() {
        Ok(c) => c,
        Err(e) => usage_error(e),
    };

    let mut client = match CzdsClient::builder().from_config(&config).build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build client: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let mut stdout = std::io::stdout();
    let exit_code = match report::run(&mut client, &selector, &mut stdout).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::GeneralError
        }
    };

    std::process::exit(exit_code.as_i32());
}
