//! Response types for the cryptocurrency endpoints.
//!
//! Fields that the API omits unless requested through `aux`, or returns as `null` for
//! untracked assets, are modelled as `Option`.

use std::collections::HashMap;

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{BoolFromInt, DefaultOnNull, serde_as};

use super::Category;
use crate::common::{ActiveState, Platform};

/// An entry of `/v1/cryptocurrency/map`.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Cryptocurrency {
    /// The unique CoinMarketCap ID.
    pub id: u64,
    pub name: String,
    /// Ticker symbol, always upper case.
    pub symbol: String,
    pub slug: String,
    /// Rank by market cap.
    pub rank: Option<u32>,
    /// `Active` when at least one active market is tracked.
    pub is_active: Option<ActiveState>,
    /// Listing status. Only returned when requested through `aux`.
    pub status: Option<String>,
    /// When this cryptocurrency was first available on the platform.
    pub first_historical_data: Option<DateTime<Utc>>,
    /// When this cryptocurrency's market data was last updated.
    pub last_historical_data: Option<DateTime<Utc>>,
    /// Parent platform if this is a token.
    pub platform: Option<Platform>,
}

/// Static metadata from `/v1/cryptocurrency/info`.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct CryptocurrencyInfo {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub category: Option<Category>,
    pub slug: String,
    /// Logo URL at 64px. Replace `64x64` in the path for 16, 32, 128 or 200px.
    pub logo: Option<String>,
    pub description: Option<String>,
    pub date_added: Option<DateTime<Utc>>,
    /// Markdown notice about an event affecting this cryptocurrency.
    pub notice: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub tags: Vec<String>,
    pub platform: Option<Platform>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub urls: CryptocurrencyUrls,
}

/// Resource links for a cryptocurrency.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq, Builder)]
#[serde(default)]
pub struct CryptocurrencyUrls {
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub website: Vec<String>,
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub technical_doc: Vec<String>,
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub explorer: Vec<String>,
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source_code: Vec<String>,
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub message_board: Vec<String>,
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub chat: Vec<String>,
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub announcement: Vec<String>,
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub reddit: Vec<String>,
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub twitter: Vec<String>,
}

/// An entry of the latest or historical listing.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct CryptocurrencyListing {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub cmc_rank: Option<u32>,
    pub num_market_pairs: Option<u32>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub market_cap_by_total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub tags: Vec<String>,
    pub platform: Option<Platform>,
    /// Market quote per requested conversion currency.
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub quote: HashMap<String, MarketQuote>,
}

/// Market metrics in one conversion currency.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Builder)]
pub struct MarketQuote {
    pub price: Option<f64>,
    pub volume_24h: Option<f64>,
    pub volume_24h_reported: Option<f64>,
    pub volume_7d: Option<f64>,
    pub volume_7d_reported: Option<f64>,
    pub volume_30d: Option<f64>,
    pub volume_30d_reported: Option<f64>,
    pub volume_change_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_dominance: Option<f64>,
    pub fully_diluted_market_cap: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub percent_change_30d: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// An entry of `/v1/cryptocurrency/quotes/latest`.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct CryptocurrencyQuote {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub is_active: Option<ActiveState>,
    /// Whether this entry is a fiat currency.
    #[serde_as(as = "Option<BoolFromInt>")]
    pub is_fiat: Option<bool>,
    pub cmc_rank: Option<u32>,
    pub num_market_pairs: Option<u32>,
    pub circulating_supply: Option<f64>,
    /// Coins in existence minus verifiably burned coins.
    pub total_supply: Option<f64>,
    /// Only returned when requested through `aux`.
    pub market_cap_by_total_supply: Option<f64>,
    /// Expected maximum number of coins ever available.
    pub max_supply: Option<f64>,
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub tags: Vec<String>,
    pub platform: Option<Platform>,
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub quote: HashMap<String, MarketQuote>,
}

/// An entry of `/v1/cryptocurrency/ohlcv/latest`: the current, still open candle.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct CryptocurrencyOhlcv {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub candle: OhlcvQuote,
}

/// An entry of `/v1/cryptocurrency/ohlcv/historical`.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct OhlcvHistorical {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub quotes: Vec<OhlcvQuote>,
}

/// One candle: when each extremum occurred, and the values per conversion currency.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Builder)]
pub struct OhlcvQuote {
    pub time_open: Option<DateTime<Utc>>,
    pub time_high: Option<DateTime<Utc>>,
    pub time_low: Option<DateTime<Utc>>,
    pub time_close: Option<DateTime<Utc>>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub quote: HashMap<String, Ohlcv>,
}

/// Open/high/low/close/volume in one conversion currency.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Builder)]
pub struct Ohlcv {
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub market_cap: Option<f64>,
    /// Candle timestamp; only set on historical candles.
    pub timestamp: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// An entry of `/v1/cryptocurrency/price-performance-stats/latest`.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct PricePerformanceStats {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub last_updated: Option<DateTime<Utc>>,
    /// Statistics keyed by window (`all_time`, `24h`, `7d`, ...).
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub periods: HashMap<String, Period>,
}

/// Price performance over one window.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Builder)]
pub struct Period {
    pub open_timestamp: Option<DateTime<Utc>>,
    pub high_timestamp: Option<DateTime<Utc>>,
    pub low_timestamp: Option<DateTime<Utc>>,
    pub close_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub quote: HashMap<String, StatsQuote>,
}

/// Price performance over one window in one conversion currency.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Builder)]
pub struct StatsQuote {
    pub open: Option<f64>,
    pub open_timestamp: Option<DateTime<Utc>>,
    pub high: Option<f64>,
    pub high_timestamp: Option<DateTime<Utc>>,
    pub low: Option<f64>,
    pub low_timestamp: Option<DateTime<Utc>>,
    pub close: Option<f64>,
    pub close_timestamp: Option<DateTime<Utc>>,
    pub percent_change: Option<f64>,
    pub price_change: Option<f64>,
}
