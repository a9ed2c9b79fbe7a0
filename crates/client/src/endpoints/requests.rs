//! Zone-request endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::error_for_status;
use crate::error::Result;
use crate::models::{RequestInfo, RequestsFilter, RequestsResponse};

/// Fetch the detailed status of a single zone request.
pub async fn get_request_info(
    client: &Client,
    base_url: &str,
    token: &str,
    request_id: &str,
) -> Result<RequestInfo> {
    let url = format!("{}/czds/requests/{}", base_url, request_id);
    debug!("Fetching request info from {}", url);

    let response = client.get(&url).bearer_auth(token).send().await?;
    let response = error_for_status(response).await?;
    Ok(response.json().await?)
}

/// Fetch one page of the zone-request listing.
pub async fn list_requests(
    client: &Client,
    base_url: &str,
    token: &str,
    filter: &RequestsFilter,
) -> Result<RequestsResponse> {
    let url = format!("{}/czds/requests/all", base_url);
    debug!(
        "Fetching request listing page {} from {}",
        filter.pagination.page, url
    );

    let response = client
        .post(&url)
        .bearer_auth(token)
        .json(filter)
        .send()
        .await?;
    let response = error_for_status(response).await?;
    Ok(response.json().await?)
}
