//! Market overview across every endpoint group.
//!
//! Reads the API key from `CMC_PRO_API_KEY`. Set `CMC_SANDBOX=1` to run against the sandbox
//! host, which serves mock data.
//!
//! Run with tracing enabled:
//! ```sh
//! CMC_PRO_API_KEY=... RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example market_overview --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=market.log CMC_PRO_API_KEY=... RUST_LOG=info cargo run --example market_overview --features tracing
//! ```

use std::fs::File;
use std::time::Duration;

use coinmarketcap_sdk::cryptocurrency::request::{
    CryptocurrencyInfoRequest, CryptocurrencyMapRequest, ListingsLatestRequest,
    OhlcvLatestRequest, PricePerformanceStatsRequest, QuotesLatestRequest,
};
use coinmarketcap_sdk::cryptocurrency::{ListingsSort, PerformancePeriod};
use coinmarketcap_sdk::exchange::request::{ExchangeInfoRequest, ExchangeMapRequest};
use coinmarketcap_sdk::fiat::request::FiatMapRequest;
use coinmarketcap_sdk::global_metrics::request::GlobalMetricsLatestRequest;
use coinmarketcap_sdk::partners::request::FcasListingsLatestRequest;
use coinmarketcap_sdk::{API_KEY_VAR, Client, Config};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let api_key = std::env::var(API_KEY_VAR)?;
    let config = Config::builder()
        .api_key(api_key)
        .timeout(Duration::from_secs(30))
        .build();
    let client = if std::env::var("CMC_SANDBOX").is_ok() {
        Client::sandbox(config)?
    } else {
        Client::production(config)?
    };
    info!(host = %client.host(), "client ready");

    let map = CryptocurrencyMapRequest::builder()
        .symbol(vec!["BTC".to_owned(), "ETH".to_owned()])
        .build();
    let mut ids = Vec::new();
    match client.cryptocurrency_map(&map).await {
        Ok(entries) => {
            for entry in &entries {
                info!(endpoint = "cryptocurrency_map", id = entry.id, symbol = %entry.symbol, slug = %entry.slug);
            }
            ids = entries.iter().map(|entry| entry.id).collect();
        }
        Err(e) => error!(endpoint = "cryptocurrency_map", error = %e),
    }

    if ids.is_empty() {
        warn!("no ids discovered, falling back to BTC and ETH");
        ids = vec![1, 1027];
    }

    let info = CryptocurrencyInfoRequest::builder().id(ids.clone()).build();
    match client.cryptocurrency_info(&info).await {
        Ok(infos) => {
            for info in infos.values() {
                info!(endpoint = "cryptocurrency_info", symbol = %info.symbol, tags = info.tags.len(), logo = ?info.logo);
            }
        }
        Err(e) => error!(endpoint = "cryptocurrency_info", error = %e),
    }

    let listings = ListingsLatestRequest::builder()
        .limit(5)
        .sort(ListingsSort::MarketCap)
        .build();
    match client.listings_latest(&listings).await {
        Ok(listings) => {
            for listing in &listings {
                let price = listing.quote.get("USD").and_then(|quote| quote.price);
                info!(endpoint = "listings_latest", rank = ?listing.cmc_rank, symbol = %listing.symbol, price = ?price);
            }
        }
        Err(e) => error!(endpoint = "listings_latest", error = %e),
    }

    let quotes = QuotesLatestRequest::builder()
        .id(ids.clone())
        .convert(vec!["USD".to_owned()])
        .build();
    match client.quotes_latest(&quotes).await {
        Ok(quotes) => {
            for (id, quote) in &quotes {
                let usd = quote.quote.get("USD");
                info!(
                    endpoint = "quotes_latest",
                    id = %id,
                    price = ?usd.and_then(|q| q.price),
                    change_24h = ?usd.and_then(|q| q.percent_change_24h)
                );
            }
        }
        Err(e) => error!(endpoint = "quotes_latest", error = %e),
    }

    let ohlcv = OhlcvLatestRequest::builder().id(ids.clone()).build();
    match client.ohlcv_latest(&ohlcv).await {
        Ok(candles) => {
            for candle in candles.values() {
                let usd = candle.candle.quote.get("USD");
                info!(endpoint = "ohlcv_latest", symbol = %candle.symbol, open = ?usd.and_then(|q| q.open), high = ?usd.and_then(|q| q.high));
            }
        }
        Err(e) => error!(endpoint = "ohlcv_latest", error = %e),
    }

    let stats = PricePerformanceStatsRequest::builder()
        .id(ids)
        .time_period(vec![PerformancePeriod::AllTime, PerformancePeriod::Day])
        .build();
    match client.price_performance_stats(&stats).await {
        Ok(stats) => {
            for stat in stats.values() {
                info!(endpoint = "price_performance_stats", symbol = %stat.symbol, periods = stat.periods.len());
            }
        }
        Err(e) => error!(endpoint = "price_performance_stats", error = %e),
    }

    match client.fiat_map(&FiatMapRequest::builder().limit(5).build()).await {
        Ok(fiats) => info!(endpoint = "fiat_map", count = fiats.len()),
        Err(e) => error!(endpoint = "fiat_map", error = %e),
    }

    let exchanges = ExchangeMapRequest::builder().limit(3).build();
    let mut slugs = Vec::new();
    match client.exchange_map(&exchanges).await {
        Ok(exchanges) => {
            info!(endpoint = "exchange_map", count = exchanges.len());
            slugs = exchanges.into_iter().map(|exchange| exchange.slug).collect();
        }
        Err(e) => error!(endpoint = "exchange_map", error = %e),
    }

    if !slugs.is_empty() {
        let info = ExchangeInfoRequest::builder().slug(slugs).build();
        match client.exchange_info(&info).await {
            Ok(infos) => {
                for info in infos.values() {
                    info!(endpoint = "exchange_info", name = %info.name, launched = ?info.date_launched);
                }
            }
            Err(e) => error!(endpoint = "exchange_info", error = %e),
        }
    }

    match client
        .global_metrics_latest(&GlobalMetricsLatestRequest::default())
        .await
    {
        Ok(metrics) => info!(
            endpoint = "global_metrics_latest",
            btc_dominance = metrics.btc_dominance,
            eth_dominance = ?metrics.eth_dominance,
            active_cryptocurrencies = ?metrics.active_cryptocurrencies
        ),
        Err(e) => error!(endpoint = "global_metrics_latest", error = %e),
    }

    match client
        .fcas_listings_latest(&FcasListingsLatestRequest::builder().limit(3).build())
        .await
    {
        Ok(ratings) => {
            for rating in &ratings {
                info!(endpoint = "fcas_listings_latest", symbol = %rating.symbol, score = rating.score, grade = %rating.grade);
            }
        }
        Err(e) => error!(endpoint = "fcas_listings_latest", error = %e),
    }

    Ok(())
}
