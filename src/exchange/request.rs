#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as, skip_serializing_none};

use super::ExchangeSort;
use crate::common::{ListingStatus, start_is_unset};

/// Request parameters for `/v1/exchange/map`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct ExchangeMapRequest {
    /// Listing statuses to include (default: active).
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, ListingStatus>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub listing_status: Vec<ListingStatus>,
    /// Exchange slugs to return IDs for.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub slug: Vec<String>,
    /// 1-based offset of the first item to return.
    #[serde(skip_serializing_if = "start_is_unset")]
    pub start: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<ExchangeSort>,
    /// Supplemental fields, e.g. `first_historical_data`, `last_historical_data`, `is_active`.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub aux: Vec<String>,
}

/// Request parameters for `/v1/exchange/info`.
///
/// One of `id` or `slug` is required by the API.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct ExchangeInfoRequest {
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub id: Vec<u64>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub slug: Vec<String>,
    /// Supplemental fields, e.g. `urls`, `logo`, `description`, `date_launched`, `notice`.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub aux: Vec<String>,
}
