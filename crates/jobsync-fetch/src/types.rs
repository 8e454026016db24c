//! Response types for a paginated job-listing API such as The Muse's
//! public `/api/public/jobs` endpoint.
//!
//! Only the envelope is typed. Individual listings stay as raw JSON values
//! because every field inside them is optional and loosely shaped; the
//! flattening rules live in [`crate::extract`].

use serde::Deserialize;

/// One listing as returned by the API, before flattening.
pub type RawListing = serde_json::Value;

/// Top-level response from the jobs endpoint.
#[derive(Debug, Deserialize)]
pub struct JobsResponse {
    pub results: Vec<RawListing>,

    /// Page number this response represents. Informational only.
    #[serde(default)]
    pub page: Option<u64>,

    #[serde(default)]
    pub page_count: Option<u64>,

    /// Total listings across all pages.
    #[serde(default)]
    pub total: Option<u64>,
}
