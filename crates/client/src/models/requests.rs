//! Zone-request models for the CZDS requests API.
//!
//! Two response shapes exist: [`RequestInfo`] is the detailed single-request
//! view returned by `GET /czds/requests/{id}`, and [`ZoneRequest`] is the
//! condensed row returned inside the paginated listing envelope from
//! `POST /czds/requests/all`. Record status values are service-defined and
//! carried verbatim as strings; only the listing filter uses a typed enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use czds_config::constants::REQUESTS_PAGE_SIZE;

use crate::serde_helpers::opt_datetime;

/// Detailed status of a single zone-file access request.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestInfo {
    #[serde(rename = "requestId")]
    pub request_id: String,
    /// The service omits the TLD object on some malformed records.
    #[serde(default)]
    pub tld: Option<TldInfo>,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "opt_datetime")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_datetime")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(rename = "expired", default, deserialize_with = "opt_datetime")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub extensible: bool,
    #[serde(default)]
    pub extension_in_process: bool,
    #[serde(default)]
    pub cancellable: bool,
    #[serde(default)]
    pub request_ip: String,
    #[serde(default)]
    pub ftp_ips: Vec<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// A top-level domain as named on a request: ASCII label plus the
/// Unicode display label, which the wire spells `ulable`.
#[derive(Debug, Clone, Deserialize)]
pub struct TldInfo {
    #[serde(rename = "tld")]
    pub name: String,
    #[serde(rename = "ulable", default)]
    pub unicode_name: String,
}

/// One status-change event recorded against a request.
///
/// Order within [`RequestInfo::history`] is the service's order and is
/// preserved verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, deserialize_with = "opt_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub action: String,
}

/// Condensed zone-request row from the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneRequest {
    #[serde(rename = "requestId")]
    pub request_id: String,
    #[serde(default)]
    pub tld: String,
    #[serde(rename = "ulable", default)]
    pub unicode_tld: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "opt_datetime")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_datetime")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(rename = "expired", default, deserialize_with = "opt_datetime")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sftp: bool,
}

/// Status filter vocabulary for the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    All,
    Submitted,
    Pending,
    Approved,
    Denied,
    Revoked,
    Expired,
    Canceled,
}

/// Sort direction for the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Filter envelope POSTed to `POST /czds/requests/all`.
#[derive(Debug, Clone, Serialize)]
pub struct RequestsFilter {
    pub status: RequestStatus,
    pub filter: String,
    pub pagination: RequestsPagination,
    pub sort: RequestsSort,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestsPagination {
    pub size: u32,
    pub page: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestsSort {
    pub field: String,
    pub direction: SortDirection,
}

impl RequestsFilter {
    /// Filter for one page of the full listing, ascending by creation date
    /// so page order is stable across the walk.
    pub fn page(status: RequestStatus, page: u32) -> Self {
        Self {
            status,
            filter: String::new(),
            pagination: RequestsPagination {
                size: REQUESTS_PAGE_SIZE,
                page,
            },
            sort: RequestsSort {
                field: "created".to_string(),
                direction: SortDirection::Asc,
            },
        }
    }

    /// Filter that searches the listing for a single TLD by name.
    ///
    /// TLD labels are canonically lowercase; the search term is lowercased
    /// to match what the service indexes.
    pub fn zone_search(zone: &str) -> Self {
        Self {
            filter: zone.to_lowercase(),
            ..Self::page(RequestStatus::All, 0)
        }
    }
}

/// Page envelope returned by the listing endpoint.
///
/// `total_requests` counts the whole filtered collection, not the page.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestsResponse {
    #[serde(default)]
    pub requests: Vec<ZoneRequest>,
    #[serde(rename = "totalRequests", default)]
    pub total_requests: i64,
}
