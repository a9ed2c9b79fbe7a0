//! Selector resolution to a concrete fetch target.
//!
//! Responsibilities:
//! - Turn a [`RequestSelector`] into the thing the report driver fetches:
//!   one request id, or the full listing.
//! - Perform the zone-name lookup when a zone was selected.
//!
//! Does NOT handle:
//! - Authentication (the caller authenticates the client first).
//! - Fetching the request data itself (see `report`).
//!
//! Invariants:
//! - Only the `Zone` selector talks to the service, with exactly one
//!   lookup call. `Id` and `All` resolve without any network traffic.

use czds_client::{ClientError, CzdsClient};
use tracing::debug;

use crate::selector::RequestSelector;

/// A fully resolved fetch target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    /// Fetch one request by id.
    Single(String),
    /// Fetch the complete listing.
    All,
}

/// Resolve a selector to a fetch target.
pub async fn resolve(
    client: &CzdsClient,
    selector: &RequestSelector,
) -> Result<ReportTarget, ClientError> {
    match selector {
        RequestSelector::All => Ok(ReportTarget::All),
        RequestSelector::Id(id) => Ok(ReportTarget::Single(id.clone())),
        RequestSelector::Zone(zone) => {
            debug!("Looking up request id for zone {}", zone);
            let id = client.zone_request_id(zone).await?;
            Ok(ReportTarget::Single(id))
        }
    }
}
