//! Types shared by every endpoint group.
//!
//! Every CoinMarketCap response has the same outer shape, the [`Envelope`]:
//!
//! ```json
//! {
//!   "status": { "timestamp": "...", "error_code": 0, "error_message": null, "elapsed": 10, "credit_count": 1 },
//!   "data": { ... }
//! }
//! ```
//!
//! The [`Client`](crate::Client) unwraps `data` and drops `status`. The envelope is public so
//! callers who decode bodies themselves can still read credit usage.

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The `{status, data}` wrapper around every response body.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct Envelope<T> {
    pub status: ResponseStatus,
    pub data: T,
}

/// Call metadata present on every response, successful or not.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct ResponseStatus {
    /// Current timestamp on the server.
    pub timestamp: DateTime<Utc>,
    /// Internal error code. Falls back to the HTTP status code when there is no
    /// platform-specific code; `0` on success.
    #[serde(default)]
    #[builder(default)]
    pub error_code: i64,
    /// Error message accompanying `error_code`; `null` on success.
    pub error_message: Option<String>,
    /// Milliseconds taken to generate the response.
    #[serde(default)]
    #[builder(default)]
    pub elapsed: u64,
    /// API call credits consumed by the call.
    #[serde(default)]
    #[builder(default)]
    pub credit_count: u32,
    /// Optional notice about the endpoint (deprecations, plan limits).
    #[serde(default)]
    pub notice: Option<String>,
}

/// The parent chain a token lives on.
///
/// Entities carry this as `Option<Platform>`: it is `null` for base-layer coins.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct Platform {
    /// CoinMarketCap ID of the parent platform cryptocurrency.
    pub id: u64,
    /// Name of the parent platform cryptocurrency.
    pub name: String,
    /// Ticker symbol of the parent platform cryptocurrency.
    pub symbol: String,
    /// URL friendly shorthand of the parent platform name.
    pub slug: String,
    /// Token contract address on the parent platform.
    #[serde(default)]
    #[builder(default)]
    pub token_address: String,
}

/// Listing status filter shared by the cryptocurrency and exchange map endpoints.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum ListingStatus {
    Active,
    Inactive,
    Untracked,
}

/// Sort direction for list endpoints.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum SortDir {
    Asc,
    Desc,
}

/// The `is_active` flag: `1` when at least one active market is tracked, `0` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
#[non_exhaustive]
pub enum ActiveState {
    Inactive = 0,
    Active = 1,
}

/// `start` is a 1-based offset; anything below 1 is treated as unset and not sent.
#[expect(clippy::ref_option, reason = "Need an explicit reference for serde")]
pub(crate) fn start_is_unset(start: &Option<u32>) -> bool {
    start.is_none_or(|s| s < 1)
}
