//! Request selection from command-line flags.
//!
//! Responsibilities:
//! - Represent what the user asked to look up: one request by id, one
//!   request by zone name, or every request on the account.
//! - Reject contradictory flag combinations before any network work.
//!
//! Does NOT handle:
//! - Resolving a zone name to a request id (see `resolver`).
//!
//! Invariants:
//! - Blank and whitespace-only flag values count as absent, matching how
//!   the configuration layer treats environment variables.

use thiserror::Error;

/// What to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSelector {
    /// Report every request visible to the account.
    All,
    /// Report a single request by its identifier.
    Id(String),
    /// Report a single request by the zone (TLD) it covers.
    Zone(String),
}

/// Both `--id` and `--zone` were supplied.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("--id and --zone are mutually exclusive, pass at most one")]
pub struct SelectorConflict;

impl RequestSelector {
    /// Build a selector from the two optional flags.
    ///
    /// Supplying both flags is rejected rather than silently preferring
    /// one of them.
    pub fn from_flags(id: Option<&str>, zone: Option<&str>) -> Result<Self, SelectorConflict> {
        let id = id.map(str::trim).filter(|v| !v.is_empty());
        let zone = zone.map(str::trim).filter(|v| !v.is_empty());

        match (id, zone) {
            (Some(_), Some(_)) => Err(SelectorConflict),
            (Some(id), None) => Ok(Self::Id(id.to_string())),
            (None, Some(zone)) => Ok(Self::Zone(zone.to_string())),
            (None, None) => Ok(Self::All),
        }
    }
}
