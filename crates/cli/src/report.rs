//! Report driver.
//!
//! Responsibilities:
//! - Run the authenticate, resolve, fetch, render pipeline for a selector
//!   and write the rendered report to the output stream.
//!
//! Does NOT handle:
//! - Argument parsing, configuration, or process exit (see `main`).
//! - Rendering details (see `format`).
//!
//! Invariants:
//! - The pipeline is linear and fail-fast: no step retries, and the first
//!   error aborts the run before anything reaches the output stream.
//! - Report content is the only thing written to `out`; diagnostics go
//!   through `tracing`.

use std::io::Write;

use anyhow::{Context, Result};
use czds_client::{CzdsClient, RequestStatus};
use tracing::debug;

use crate::format;
use crate::resolver::{self, ReportTarget};
use crate::selector::RequestSelector;

/// Authenticate, resolve the selector, fetch, render, and write the report.
pub async fn run(
    client: &mut CzdsClient,
    selector: &RequestSelector,
    out: &mut impl Write,
) -> Result<()> {
    client
        .authenticate()
        .await
        .context("authentication failed")?;

    let target = resolver::resolve(client, selector)
        .await
        .context("could not resolve the request to report on")?;

    let report = match target {
        ReportTarget::Single(id) => {
            let info = client
                .request_info(&id)
                .await
                .with_context(|| format!("could not fetch request {id}"))?;
            format::format_request_info(&info)
        }
        ReportTarget::All => {
            let requests = client
                .all_requests(RequestStatus::All)
                .await
                .context("could not fetch the request listing")?;
            debug!("Total requests: {}", requests.len());
            format::format_request_listing(&requests)
        }
    };

    out.write_all(report.as_bytes())
        .context("could not write the report")?;
    Ok(())
}
