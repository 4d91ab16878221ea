//! Client for the CoinMarketCap Pro API.
//!
//! Every endpoint method is a single call of the generic `get`: encode the request into a
//! query string, send one authenticated GET, and return the `data` member of the response
//! envelope.
//!
//! # Example
//!
//! ```no_run
//! use coinmarketcap_sdk::{Client, Config};
//! use coinmarketcap_sdk::cryptocurrency::request::ListingsLatestRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder().api_key("my-api-key".to_owned()).build();
//! let client = Client::production(config)?;
//!
//! let request = ListingsLatestRequest::builder().limit(10).build();
//! for listing in client.listings_latest(&request).await? {
//!     println!("#{:?} {} ({})", listing.cmc_rank, listing.name, listing.symbol);
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::cryptocurrency::request::{
    CryptocurrencyInfoRequest, CryptocurrencyMapRequest, ListingsHistoricalRequest,
    ListingsLatestRequest, OhlcvHistoricalRequest, OhlcvLatestRequest,
    PricePerformanceStatsRequest, QuotesLatestRequest,
};
use crate::cryptocurrency::response::{
    Cryptocurrency, CryptocurrencyInfo, CryptocurrencyListing, CryptocurrencyOhlcv,
    CryptocurrencyQuote, OhlcvHistorical, PricePerformanceStats,
};
use crate::error::Error;
use crate::exchange::request::{ExchangeInfoRequest, ExchangeMapRequest};
use crate::exchange::response::{Exchange, ExchangeInfo};
use crate::fiat::request::FiatMapRequest;
use crate::fiat::response::Fiat;
use crate::global_metrics::request::{GlobalMetricsHistoricalRequest, GlobalMetricsLatestRequest};
use crate::global_metrics::response::{
    AggregatedMarketQuote, GlobalMetricsHistorical, GlobalMetricsQuotesLatest,
};
use crate::partners::request::{FcasListingsLatestRequest, FcasQuotesLatestRequest};
use crate::partners::response::FcasRating;
use crate::{API_KEY_HEADER, PRODUCTION_HOST, Result, SANDBOX_HOST, ToQueryParams as _};

/// Configuration for the [`Client`].
///
/// The API key is an explicit value: the client never reads it from the environment.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use coinmarketcap_sdk::Config;
///
/// let config = Config::builder()
///     .api_key("my-api-key".to_owned())
///     .timeout(Duration::from_secs(10))
///     .build();
/// ```
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// Sent as `X-CMC_PRO_API_KEY` on every request.
    #[builder(into)]
    api_key: SecretString,
    /// Overall timeout for one request, applied by the HTTP transport. No timeout when unset.
    timeout: Option<Duration>,
}

/// HTTP client for the CoinMarketCap Pro API.
///
/// Cheap to clone: clones share one connection pool, and concurrent calls from
/// different tasks need no coordination.
///
/// # API Base URL
///
/// [`Client::production`] targets [`PRODUCTION_HOST`], [`Client::sandbox`] targets
/// [`SANDBOX_HOST`], and [`Client::new`] accepts any host (proxies, test servers).
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
}

impl Client {
    /// Creates a new client against a custom host URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the API key is empty or not a valid header
    /// value, or the HTTP client cannot be created.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let api_key = config.api_key.expose_secret();
        if api_key.is_empty() {
            return Err(Error::validation("API key must not be empty"));
        }

        let mut key = HeaderValue::from_str(api_key)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("User-Agent", HeaderValue::from_static("coinmarketcap_sdk"));
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("Accepts", HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, key);

        let mut builder = ReqwestClient::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        // Endpoint paths are joined relative to the host, so it has to end in a slash
        let mut host = Url::parse(host)?;
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        Ok(Self {
            host,
            client: builder.build()?,
        })
    }

    /// Creates a client against the production API.
    pub fn production(config: Config) -> Result<Client> {
        Client::new(PRODUCTION_HOST, config)
    }

    /// Creates a client against the sandbox API.
    pub fn sandbox(config: Config) -> Result<Client> {
        Client::new(SANDBOX_HOST, config)
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    async fn get<Req: Serialize, Res: DeserializeOwned>(
        &self,
        path: &str,
        req: &Req,
    ) -> Result<Res> {
        let mut url = self.host.join(path)?;
        let query = req.query_params()?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        let request = self.client.request(Method::GET, url).build()?;
        crate::request(&self.client, request).await
    }

    /// Returns a mapping of cryptocurrencies to their unique CoinMarketCap IDs.
    ///
    /// Prefer the IDs over symbols in other calls: symbols are not unique.
    pub async fn cryptocurrency_map(
        &self,
        request: &CryptocurrencyMapRequest,
    ) -> Result<Vec<Cryptocurrency>> {
        self.get("v1/cryptocurrency/map", request).await
    }

    /// Returns static metadata (logo, description, links, platform) for one or more
    /// cryptocurrencies, keyed by the identifier used in the request.
    pub async fn cryptocurrency_info(
        &self,
        request: &CryptocurrencyInfoRequest,
    ) -> Result<HashMap<String, CryptocurrencyInfo>> {
        self.get("v1/cryptocurrency/info", request).await
    }

    /// Returns a paginated list of active cryptocurrencies with latest market data.
    pub async fn listings_latest(
        &self,
        request: &ListingsLatestRequest,
    ) -> Result<Vec<CryptocurrencyListing>> {
        self.get("v1/cryptocurrency/listings/latest", request).await
    }

    /// Returns the ranked listing as it was at a point in time.
    pub async fn listings_historical(
        &self,
        request: &ListingsHistoricalRequest,
    ) -> Result<Vec<CryptocurrencyListing>> {
        self.get("v1/cryptocurrency/listings/historical", request)
            .await
    }

    /// Returns the latest market quote for one or more cryptocurrencies.
    ///
    /// Each entry carries one [`MarketQuote`](crate::cryptocurrency::response::MarketQuote)
    /// per requested `convert` currency.
    pub async fn quotes_latest(
        &self,
        request: &QuotesLatestRequest,
    ) -> Result<HashMap<String, CryptocurrencyQuote>> {
        self.get("v1/cryptocurrency/quotes/latest", request).await
    }

    /// Returns the current day's open candle, updated every few minutes.
    pub async fn ohlcv_latest(
        &self,
        request: &OhlcvLatestRequest,
    ) -> Result<HashMap<String, CryptocurrencyOhlcv>> {
        self.get("v1/cryptocurrency/ohlcv/latest", request).await
    }

    /// Returns historical candles for one or more cryptocurrencies.
    pub async fn ohlcv_historical(
        &self,
        request: &OhlcvHistoricalRequest,
    ) -> Result<HashMap<String, OhlcvHistorical>> {
        self.get("v1/cryptocurrency/ohlcv/historical", request).await
    }

    /// Returns price performance statistics over the requested windows.
    pub async fn price_performance_stats(
        &self,
        request: &PricePerformanceStatsRequest,
    ) -> Result<HashMap<String, PricePerformanceStats>> {
        self.get("v1/cryptocurrency/price-performance-stats/latest", request)
            .await
    }

    /// Returns a mapping of fiat currencies (and optionally precious metals) to CoinMarketCap IDs.
    pub async fn fiat_map(&self, request: &FiatMapRequest) -> Result<Vec<Fiat>> {
        self.get("v1/fiat/map", request).await
    }

    /// Returns a mapping of exchanges to their unique CoinMarketCap IDs.
    pub async fn exchange_map(&self, request: &ExchangeMapRequest) -> Result<Vec<Exchange>> {
        self.get("v1/exchange/map", request).await
    }

    /// Returns static metadata for one or more exchanges, keyed by the identifier used in
    /// the request.
    pub async fn exchange_info(
        &self,
        request: &ExchangeInfoRequest,
    ) -> Result<HashMap<String, ExchangeInfo>> {
        self.get("v1/exchange/info", request).await
    }

    /// Returns the latest global market metrics.
    pub async fn global_metrics_latest(
        &self,
        request: &GlobalMetricsLatestRequest,
    ) -> Result<GlobalMetricsQuotesLatest> {
        self.get("v1/global-metrics/quotes/latest", request).await
    }

    /// Returns an interval of historical global market metrics.
    pub async fn global_metrics_historical(
        &self,
        request: &GlobalMetricsHistoricalRequest,
    ) -> Result<Vec<AggregatedMarketQuote>> {
        let historical: GlobalMetricsHistorical = self
            .get("v1/global-metrics/quotes/historical", request)
            .await?;

        Ok(historical.quotes)
    }

    /// Returns a paginated list of FCAS scores for all cryptocurrencies.
    pub async fn fcas_listings_latest(
        &self,
        request: &FcasListingsLatestRequest,
    ) -> Result<Vec<FcasRating>> {
        self.get("v1/partners/flipside-crypto/fcas/listings/latest", request)
            .await
    }

    /// Returns the latest FCAS score for one or more cryptocurrencies.
    pub async fn fcas_quotes_latest(
        &self,
        request: &FcasQuotesLatestRequest,
    ) -> Result<HashMap<String, FcasRating>> {
        self.get("v1/partners/flipside-crypto/fcas/quotes/latest", request)
            .await
    }
}
