//! Exit codes for the CLI.
//!
//! Responsibilities:
//! - Define the process exit statuses the binary can produce.
//!
//! Does NOT handle:
//! - Error construction or formatting (errors are printed where they occur).
//!
//! Invariants:
//! - The surface is deliberately small: 0 for success (including
//!   `--version`), 1 for everything else. Callers that script around the
//!   binary only need to distinguish "worked" from "did not".

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The report was written in full (or `--version` was printed).
    Success = 0,
    /// Configuration, authentication, lookup, fetch, or output failure.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert to an i32 for `std::process::exit`.
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}
