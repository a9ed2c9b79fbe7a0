//! Centralized constants for the CZDS workspace.
//!
//! Default values shared across crates to avoid magic number duplication.

/// Production endpoint for ICANN account authentication.
pub const DEFAULT_AUTH_URL: &str = "https://account-api.icann.org/api/authenticate";

/// Production endpoint for the CZDS REST API.
pub const DEFAULT_BASE_URL: &str = "https://czds-api.icann.org";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed HTTP request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Page size used when walking the zone-request listing.
pub const REQUESTS_PAGE_SIZE: u32 = 100;
