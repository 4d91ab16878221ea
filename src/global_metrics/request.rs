#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as, skip_serializing_none};

/// Request parameters for `/v1/global-metrics/quotes/latest`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct GlobalMetricsLatestRequest {
    /// Currencies (symbols) to convert the aggregate quote into.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert: Vec<String>,
    /// Currencies (CoinMarketCap IDs) to convert the aggregate quote into.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, u64>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub convert_id: Vec<u64>,
}

/// Request parameters for `/v1/global-metrics/quotes/historical`.
///
/// # Example
///
/// ```
/// use coinmarketcap_sdk::global_metrics::request::GlobalMetricsHistoricalRequest;
///
/// let request = GlobalMetricsHistoricalRequest::builder()
///     .time_start("2024-01-01T00:00:00Z".parse().unwrap())
///     .count(30)
///     .interval("daily")
///     .build();
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct GlobalMetricsHistoricalRequest {
    pub time_start: Option<DateTime<Utc>>,
    pub time_end: Option<DateTime<Utc>>,
    /// Number of intervals to return (default: 10).
    pub count: Option<u32>,
    /// Sampling interval, e.g. `5m`, `hourly`, `daily`, `weekly`.
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
    /// Supplemental fields, e.g. `btc_dominance`, `active_exchanges`, `total_volume_24h`.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub aux: Vec<String>,
}
