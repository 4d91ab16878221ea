//! Request types for the cryptocurrency endpoints.
//!
//! Every field is optional. Unset fields are left out of the query string, list fields are
//! sent comma-separated, and nothing is range-checked locally: an out-of-range `limit` is
//! sent as-is and rejected, if at all, by the API.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as, skip_serializing_none};

use super::{CryptocurrencyType, ListingsSort, MapSort, OhlcvTimePeriod, PerformancePeriod};
use crate::common::{ListingStatus, SortDir, start_is_unset};

/// Request parameters for `/v1/cryptocurrency/map`.
///
/// # Example
///
/// ```
/// use coinmarketcap_sdk::common::ListingStatus;
/// use coinmarketcap_sdk::cryptocurrency::request::CryptocurrencyMapRequest;
///
/// let request = CryptocurrencyMapRequest::builder()
///     .listing_status(vec![ListingStatus::Active, ListingStatus::Untracked])
///     .limit(100)
///     .build();
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct CryptocurrencyMapRequest {
    /// Listing statuses to include (default: active).
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, ListingStatus>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub listing_status: Vec<ListingStatus>,
    /// 1-based offset of the first item to return.
    #[serde(skip_serializing_if = "start_is_unset")]
    pub start: Option<u32>,
    /// Number of results to return (1-5000).
    pub limit: Option<u32>,
    /// Sort field (default: id).
    pub sort: Option<MapSort>,
    /// Symbols to return IDs for. When set, the other filters are ignored by the API.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub symbol: Vec<String>,
    /// Supplemental fields, e.g. `platform`, `first_historical_data`, `is_active`, `status`.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub aux: Vec<String>,
}

/// Request parameters for `/v1/cryptocurrency/info`.
///
/// At least one of `id`, `slug` or `symbol` is required by the API.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct CryptocurrencyInfoRequest {
    /// CoinMarketCap cryptocurrency IDs.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub id: Vec<u64>,
    /// Cryptocurrency slugs.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub slug: Vec<String>,
    /// Cryptocurrency symbols.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub symbol: Vec<String>,
    /// Supplemental fields, e.g. `urls`, `logo`, `description`, `tags`, `platform`, `notice`.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub aux: Vec<String>,
}

/// Request parameters for `/v1/cryptocurrency/listings/latest`.
///
/// # Example
///
/// ```
/// use coinmarketcap_sdk::common::SortDir;
/// use coinmarketcap_sdk::cryptocurrency::ListingsSort;
/// use coinmarketcap_sdk::cryptocurrency::request::ListingsLatestRequest;
///
/// let request = ListingsLatestRequest::builder()
///     .limit(50)
///     .market_cap_min(1_000_000_000.0)
///     .sort(ListingsSort::Volume24h)
///     .sort_dir(SortDir::Desc)
///     .convert(vec!["USD".to_owned(), "EUR".to_owned()])
///     .build();
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct ListingsLatestRequest {
    /// 1-based offset of the first item to return.
    #[serde(skip_serializing_if = "start_is_unset")]
    pub start: Option<u32>,
    /// Number of results to return (1-5000).
    pub limit: Option<u32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub market_cap_min: Option<f64>,
    pub market_cap_max: Option<f64>,
    pub volume_24h_min: Option<f64>,
    pub volume_24h_max: Option<f64>,
    pub circulating_supply_min: Option<f64>,
    pub circulating_supply_max: Option<f64>,
    pub percent_change_24h_min: Option<f64>,
    pub percent_change_24h_max: Option<f64>,
    /// Currencies (symbols) to convert market quotes into.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert: Vec<String>,
    /// Currencies (CoinMarketCap IDs) to convert market quotes into.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert_id: Vec<u64>,
    /// Sort field (default: market_cap).
    pub sort: Option<ListingsSort>,
    pub sort_dir: Option<SortDir>,
    pub cryptocurrency_type: Option<CryptocurrencyType>,
    /// Tag filter, e.g. `defi` or `filesharing`.
    #[builder(into)]
    pub tag: Option<String>,
    /// Supplemental fields, e.g. `num_market_pairs`, `tags`, `platform`, `max_supply`.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub aux: Vec<String>,
}

/// Request parameters for `/v1/cryptocurrency/listings/historical`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct ListingsHistoricalRequest {
    /// Date of the snapshot to return.
    pub date: Option<DateTime<Utc>>,
    /// 1-based offset of the first item to return.
    #[serde(skip_serializing_if = "start_is_unset")]
    pub start: Option<u32>,
    /// Number of results to return (1-5000).
    pub limit: Option<u32>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert: Vec<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert_id: Vec<u64>,
    /// Sort field (default: cmc_rank).
    pub sort: Option<ListingsSort>,
    pub sort_dir: Option<SortDir>,
    pub cryptocurrency_type: Option<CryptocurrencyType>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub aux: Vec<String>,
}

/// Request parameters for `/v1/cryptocurrency/quotes/latest`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct QuotesLatestRequest {
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub id: Vec<u64>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub slug: Vec<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub symbol: Vec<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert: Vec<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert_id: Vec<u64>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub aux: Vec<String>,
    /// Skip invalid lookups instead of failing the whole request.
    pub skip_invalid: Option<bool>,
}

/// Request parameters for `/v1/cryptocurrency/ohlcv/latest`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct OhlcvLatestRequest {
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub id: Vec<u64>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub symbol: Vec<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert: Vec<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert_id: Vec<u64>,
    pub skip_invalid: Option<bool>,
}

/// Request parameters for `/v1/cryptocurrency/ohlcv/historical`.
///
/// # Example
///
/// ```
/// use coinmarketcap_sdk::cryptocurrency::OhlcvTimePeriod;
/// use coinmarketcap_sdk::cryptocurrency::request::OhlcvHistoricalRequest;
///
/// let request = OhlcvHistoricalRequest::builder()
///     .symbol(vec!["BTC".to_owned()])
///     .time_period(OhlcvTimePeriod::Hourly)
///     .count(24)
///     .interval("hourly")
///     .build();
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct OhlcvHistoricalRequest {
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub id: Vec<u64>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub slug: Vec<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub symbol: Vec<String>,
    /// Candle size (default: daily).
    pub time_period: Option<OhlcvTimePeriod>,
    pub time_start: Option<DateTime<Utc>>,
    pub time_end: Option<DateTime<Utc>>,
    /// Number of intervals to return (default: 10).
    pub count: Option<u32>,
    /// Sampling interval, e.g. `hourly`, `daily`, `weekly`, `1d`, `7d`.
    #[builder(into)]
    pub interval: Option<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert: Vec<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert_id: Vec<u64>,
    pub skip_invalid: Option<bool>,
}

/// Request parameters for `/v1/cryptocurrency/price-performance-stats/latest`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct PricePerformanceStatsRequest {
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub id: Vec<u64>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub slug: Vec<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub symbol: Vec<String>,
    /// Windows to report (default: all_time).
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, PerformancePeriod>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub time_period: Vec<PerformancePeriod>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert: Vec<String>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert_id: Vec<u64>,
}
