//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not select what to fetch (see `selector` module).
//! - Does not handle config loading (see `czds_config`).

use clap::Parser;

#[derive(Parser)]
#[command(name = "czds-status")]
#[command(about = "Report the status of ICANN CZDS zone file access requests", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  czds-status\n  czds-status --zone example\n  czds-status --id 24c92d44-c6d7-4f8a-a404-5e41712cd17a\n  czds-status -u user@example.org -p hunter2 --verbose\n"
)]
pub struct Cli {
    /// Username for ICANN account authentication
    #[arg(short, long, env = "CZDS_USERNAME")]
    pub username: Option<String>,

    /// Password for ICANN account authentication
    #[arg(short, long, env = "CZDS_PASSWORD")]
    pub password: Option<String>,

    /// Report a single zone file access request by its id
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Report a single zone file access request by zone (TLD) name
    #[arg(long, value_name = "ZONE")]
    pub zone: Option<String>,

    /// Base URL of the CZDS API
    #[arg(long, env = "CZDS_BASE_URL")]
    pub base_url: Option<String>,

    /// URL of the ICANN account authentication endpoint
    #[arg(long, env = "CZDS_AUTH_URL")]
    pub auth_url: Option<String>,

    /// Connection timeout in seconds
    #[arg(long, env = "CZDS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
