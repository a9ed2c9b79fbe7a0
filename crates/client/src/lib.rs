//! ICANN CZDS REST API client.
//!
//! This crate provides a type-safe client for the Centralized Zone Data
//! Service: account authentication against the ICANN account API and
//! read-only retrieval of zone-file access requests (single lookup,
//! paginated listing, zone-name resolution).

mod auth;
pub mod client;
pub mod error;
pub mod models;
mod serde_helpers;

pub mod endpoints;

pub use client::CzdsClient;
pub use client::builder::CzdsClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    HistoryEntry, RequestInfo, RequestStatus, RequestsFilter, RequestsPagination, RequestsResponse,
    RequestsSort, SortDirection, TldInfo, ZoneRequest,
};
