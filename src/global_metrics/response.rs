use std::collections::HashMap;

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

/// Payload of `/v1/global-metrics/quotes/latest`.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct GlobalMetricsQuotesLatest {
    /// Bitcoin's share of total market cap, in percent.
    pub btc_dominance: f64,
    /// Ethereum's share of total market cap, in percent.
    pub eth_dominance: Option<f64>,
    pub active_cryptocurrencies: Option<u64>,
    pub total_cryptocurrencies: Option<u64>,
    pub active_market_pairs: Option<u64>,
    pub active_exchanges: Option<u64>,
    pub total_exchanges: Option<u64>,
    pub last_updated: Option<DateTime<Utc>>,
    /// Aggregate market quote per conversion currency.
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub quote: HashMap<String, GlobalMetricsQuote>,
}

/// Aggregate market totals in one conversion currency.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Builder)]
pub struct GlobalMetricsQuote {
    pub total_market_cap: Option<f64>,
    pub total_volume_24h: Option<f64>,
    pub total_volume_24h_reported: Option<f64>,
    pub altcoin_volume_24h: Option<f64>,
    pub altcoin_volume_24h_reported: Option<f64>,
    pub altcoin_market_cap: Option<f64>,
    /// Set on historical quotes instead of `last_updated`.
    pub timestamp: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Payload of `/v1/global-metrics/quotes/historical`.
///
/// [`Client::global_metrics_historical`](crate::Client::global_metrics_historical) unwraps
/// this to its `quotes`.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct GlobalMetricsHistorical {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub quotes: Vec<AggregatedMarketQuote>,
}

/// One interval of historical global metrics.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct AggregatedMarketQuote {
    pub timestamp: Option<DateTime<Utc>>,
    /// The interval timestamp the sample was matched to.
    pub search_interval: Option<DateTime<Utc>>,
    pub btc_dominance: Option<f64>,
    pub active_cryptocurrencies: Option<u64>,
    pub active_exchanges: Option<u64>,
    pub active_market_pairs: Option<u64>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub quote: HashMap<String, GlobalMetricsQuote>,
}
