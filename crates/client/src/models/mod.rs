//! Data models for CZDS API requests and responses.
//!
//! This module provides types for serializing the listing filter envelope
//! and deserializing CZDS REST API responses. Types are organized by
//! resource in submodules and re-exported here for convenient access.

pub mod auth;
pub mod requests;

pub use auth::{AuthCredentials, AuthResponse};
pub use requests::{
    HistoryEntry, RequestInfo, RequestStatus, RequestsFilter, RequestsPagination, RequestsResponse,
    RequestsSort, SortDirection, TldInfo, ZoneRequest,
};
