//! Cryptocurrency endpoints and types.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Client method |
//! |----------|---------------|
//! | `/v1/cryptocurrency/map` | [`Client::cryptocurrency_map`](crate::Client::cryptocurrency_map) |
//! | `/v1/cryptocurrency/info` | [`Client::cryptocurrency_info`](crate::Client::cryptocurrency_info) |
//! | `/v1/cryptocurrency/listings/latest` | [`Client::listings_latest`](crate::Client::listings_latest) |
//! | `/v1/cryptocurrency/listings/historical` | [`Client::listings_historical`](crate::Client::listings_historical) |
//! | `/v1/cryptocurrency/quotes/latest` | [`Client::quotes_latest`](crate::Client::quotes_latest) |
//! | `/v1/cryptocurrency/ohlcv/latest` | [`Client::ohlcv_latest`](crate::Client::ohlcv_latest) |
//! | `/v1/cryptocurrency/ohlcv/historical` | [`Client::ohlcv_historical`](crate::Client::ohlcv_historical) |
//! | `/v1/cryptocurrency/price-performance-stats/latest` | [`Client::price_performance_stats`](crate::Client::price_performance_stats) |
//!
//! # Example
//!
//! ```no_run
//! use coinmarketcap_sdk::{Client, Config};
//! use coinmarketcap_sdk::cryptocurrency::request::QuotesLatestRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder().api_key("my-api-key".to_owned()).build();
//! let client = Client::production(config)?;
//!
//! let request = QuotesLatestRequest::builder()
//!     .symbol(vec!["BTC".to_owned(), "ETH".to_owned()])
//!     .convert(vec!["USD".to_owned()])
//!     .build();
//!
//! let quotes = client.quotes_latest(&request).await?;
//! if let Some(btc) = quotes.get("BTC") {
//!     println!("BTC: {:?}", btc.quote.get("USD").and_then(|q| q.price));
//! }
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

/// Sort field for `/v1/cryptocurrency/map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum MapSort {
    Id,
    CmcRank,
}

/// Sort field for the listings endpoints.
///
/// [`CmcRank`](Self::CmcRank) is only accepted by the historical listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum ListingsSort {
    #[serde(rename = "cmc_rank")]
    CmcRank,
    #[serde(rename = "market_cap")]
    MarketCap,
    #[serde(rename = "market_cap_strict")]
    MarketCapStrict,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "symbol")]
    Symbol,
    #[serde(rename = "date_added")]
    DateAdded,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "circulating_supply")]
    CirculatingSupply,
    #[serde(rename = "total_supply")]
    TotalSupply,
    #[serde(rename = "max_supply")]
    MaxSupply,
    #[serde(rename = "num_market_pairs")]
    NumMarketPairs,
    #[serde(rename = "market_cap_by_total_supply_strict")]
    MarketCapByTotalSupplyStrict,
    #[serde(rename = "volume_24h")]
    Volume24h,
    #[serde(rename = "volume_7d")]
    Volume7d,
    #[serde(rename = "volume_30d")]
    Volume30d,
    #[serde(rename = "percent_change_1h")]
    PercentChange1h,
    #[serde(rename = "percent_change_24h")]
    PercentChange24h,
    #[serde(rename = "percent_change_7d")]
    PercentChange7d,
}

/// Restricts listings to coins, tokens, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum CryptocurrencyType {
    All,
    Coins,
    Tokens,
}

/// Candle size for `/v1/cryptocurrency/ohlcv/historical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OhlcvTimePeriod {
    Daily,
    Hourly,
}

/// Window reported by `/v1/cryptocurrency/price-performance-stats/latest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[non_exhaustive]
pub enum PerformancePeriod {
    #[serde(rename = "all_time")]
    #[strum(serialize = "all_time")]
    AllTime,
    #[serde(rename = "yesterday")]
    #[strum(serialize = "yesterday")]
    Yesterday,
    #[serde(rename = "24h")]
    #[strum(serialize = "24h")]
    Day,
    #[serde(rename = "7d")]
    #[strum(serialize = "7d")]
    Week,
    #[serde(rename = "30d")]
    #[strum(serialize = "30d")]
    Month,
    #[serde(rename = "90d")]
    #[strum(serialize = "90d")]
    Quarter,
    #[serde(rename = "365d")]
    #[strum(serialize = "365d")]
    Year,
}

/// Whether a cryptocurrency is a base-layer coin or a token on another platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum Category {
    Coin,
    Token,
    /// Unknown category from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}
