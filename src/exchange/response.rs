use std::collections::HashMap;

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::common::ActiveState;

/// An entry of `/v1/exchange/map`.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Exchange {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub is_active: Option<ActiveState>,
    pub num_market_pairs: Option<u32>,
    pub first_historical_data: Option<DateTime<Utc>>,
    pub last_historical_data: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
    /// Volume metrics per conversion currency, when the API includes them.
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub quote: HashMap<String, ExchangeQuote>,
}

/// Exchange volume metrics in one conversion currency.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Builder)]
pub struct ExchangeQuote {
    pub volume_24h: Option<f64>,
    pub volume_24h_adjusted: Option<f64>,
    pub volume_7d: Option<f64>,
    pub volume_30d: Option<f64>,
    pub market_cap: Option<f64>,
    pub percent_change_volume_24h: Option<f64>,
    pub percent_change_volume_7d: Option<f64>,
    pub percent_change_volume_30d: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Static metadata from `/v1/exchange/info`.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct ExchangeInfo {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub date_launched: Option<DateTime<Utc>>,
    pub notice: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub urls: ExchangeUrls,
}

/// Resource links for an exchange.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq, Builder)]
#[serde(default)]
pub struct ExchangeUrls {
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub website: Vec<String>,
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub blog: Vec<String>,
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub chat: Vec<String>,
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub fee: Vec<String>,
    #[builder(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub twitter: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_quote_and_urls_decode_as_empty() {
        let exchange = serde_json::json!({
            "id": 270,
            "name": "Binance",
            "slug": "binance",
            "is_active": 1,
            "quote": null
        });
        let info = serde_json::json!({
            "id": 270,
            "name": "Binance",
            "slug": "binance",
            "urls": null
        });
        let partial_urls = serde_json::json!({
            "id": 294,
            "name": "OKX",
            "slug": "okx",
            "urls": { "website": ["https://www.okx.com/"], "blog": null }
        });

        let exchange: Exchange = serde_json::from_value(exchange).expect("exchange");
        let info: ExchangeInfo = serde_json::from_value(info).expect("info");
        let partial_urls: ExchangeInfo = serde_json::from_value(partial_urls).expect("partial urls");

        assert!(exchange.quote.is_empty());
        assert_eq!(exchange.is_active, Some(ActiveState::Active));
        assert_eq!(info.urls, ExchangeUrls::default());
        assert_eq!(partial_urls.urls.website, vec!["https://www.okx.com/".to_owned()]);
        assert!(partial_urls.urls.blog.is_empty());
    }
}
