//! Zone-request retrieval methods.

use secrecy::ExposeSecret;
use tracing::debug;

use crate::client::CzdsClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{RequestInfo, RequestStatus, RequestsFilter, ZoneRequest};

impl CzdsClient {
    /// Fetch the detailed status of a single zone request by identifier.
    pub async fn request_info(&self, request_id: &str) -> Result<RequestInfo> {
        let token = self.auth.bearer_token()?;
        endpoints::get_request_info(
            &self.http,
            &self.base_url,
            token.expose_secret(),
            request_id,
        )
        .await
    }

    /// Fetch every zone request with the given status.
    ///
    /// The listing endpoint is paginated; pages are walked in ascending
    /// creation order and concatenated, so the returned order is the
    /// service's order. An empty collection is a normal result.
    pub async fn all_requests(&self, status: RequestStatus) -> Result<Vec<ZoneRequest>> {
        let token = self.auth.bearer_token()?;

        let mut requests: Vec<ZoneRequest> = Vec::new();
        let mut page = 0u32;
        loop {
            let filter = RequestsFilter::page(status, page);
            let response = endpoints::list_requests(
                &self.http,
                &self.base_url,
                token.expose_secret(),
                &filter,
            )
            .await?;

            let fetched = response.requests.len();
            requests.extend(response.requests);

            // total_requests counts the whole collection; stop once we have
            // it all, or when the service stops producing rows.
            if fetched == 0 || requests.len() as i64 >= response.total_requests {
                break;
            }
            page += 1;
        }

        debug!("Fetched {} zone requests", requests.len());
        Ok(requests)
    }

    /// Resolve a zone (TLD) name to its request identifier.
    ///
    /// Issues one filtered listing call and matches the ASCII TLD label
    /// case-insensitively. An unknown zone is [`ClientError::NotFound`].
    pub async fn zone_request_id(&self, zone: &str) -> Result<String> {
        let token = self.auth.bearer_token()?;

        let filter = RequestsFilter::zone_search(zone);
        let response = endpoints::list_requests(
            &self.http,
            &self.base_url,
            token.expose_secret(),
            &filter,
        )
        .await?;

        response
            .requests
            .into_iter()
            .find(|request| request.tld.eq_ignore_ascii_case(zone))
            .map(|request| request.request_id)
            .ok_or_else(|| ClientError::NotFound(format!("no request found for zone {zone}")))
    }
}
