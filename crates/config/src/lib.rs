//! Configuration management for the CZDS status tool.
//!
//! This crate assembles CZDS connection configuration from `.env` files,
//! `CZDS_*` environment variables, and explicit overrides, and validates
//! the result into an immutable [`Config`].

pub mod constants;
mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, Credentials};
