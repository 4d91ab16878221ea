mod common;

mod map {
    use coinmarketcap_sdk::common::ActiveState;
    use coinmarketcap_sdk::cryptocurrency::request::CryptocurrencyMapRequest;
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::{client, envelope};

    #[tokio::test]
    async fn map_by_symbol_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/cryptocurrency/map")
                .query_param("symbol", "BTC");
            then.status(StatusCode::OK).json_body(envelope(json!([
                {
                    "id": 1,
                    "name": "Bitcoin",
                    "symbol": "BTC",
                    "slug": "bitcoin",
                    "rank": 1,
                    "is_active": 1,
                    "first_historical_data": "2013-04-28T18:47:21.000Z",
                    "last_historical_data": "2024-05-01T11:59:00.000Z",
                    "platform": null
                }
            ])));
        });

        let request = CryptocurrencyMapRequest::builder()
            .symbol(vec!["BTC".to_owned()])
            .build();
        let response = client.cryptocurrency_map(&request).await?;

        assert_eq!(response.len(), 1);
        let bitcoin = &response[0];
        assert_eq!(bitcoin.id, 1);
        assert_eq!(bitcoin.symbol, "BTC");
        assert_eq!(bitcoin.slug, "bitcoin");
        assert_eq!(bitcoin.rank, Some(1));
        assert_eq!(bitcoin.is_active, Some(ActiveState::Active));
        assert!(bitcoin.platform.is_none());
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn zero_start_is_not_sent() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/cryptocurrency/map")
                .query_param_missing("start")
                .query_param("limit", "0");
            then.status(StatusCode::OK).json_body(envelope(json!([])));
        });

        let request = CryptocurrencyMapRequest::builder().start(0).limit(0).build();
        let response = client.cryptocurrency_map(&request).await?;

        assert!(response.is_empty());
        mock.assert();

        Ok(())
    }
}

mod info {
    use coinmarketcap_sdk::cryptocurrency::Category;
    use coinmarketcap_sdk::cryptocurrency::request::CryptocurrencyInfoRequest;
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::{client, envelope};

    #[tokio::test]
    async fn info_for_two_symbols_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/cryptocurrency/info")
                .query_param("symbol", "BTC,ETH");
            then.status(StatusCode::OK).json_body(envelope(json!({
                "BTC": {
                    "id": 1,
                    "name": "Bitcoin",
                    "symbol": "BTC",
                    "category": "coin",
                    "slug": "bitcoin",
                    "logo": "https://s2.coinmarketcap.com/static/img/coins/64x64/1.png",
                    "description": "Bitcoin (BTC) is a cryptocurrency.",
                    "date_added": "2013-04-28T00:00:00.000Z",
                    "tags": ["mineable", "pow"],
                    "platform": null,
                    "urls": {
                        "website": ["https://bitcoin.org/"],
                        "source_code": ["https://github.com/bitcoin/bitcoin"],
                        "reddit": ["https://reddit.com/r/bitcoin"],
                        "twitter": []
                    }
                },
                "ETH": {
                    "id": 1027,
                    "name": "Ethereum",
                    "symbol": "ETH",
                    "category": "coin",
                    "slug": "ethereum",
                    "tags": null,
                    "platform": null
                }
            })));
        });

        let request = CryptocurrencyInfoRequest::builder()
            .symbol(vec!["BTC".to_owned(), "ETH".to_owned()])
            .build();
        let response = client.cryptocurrency_info(&request).await?;

        assert_eq!(response.len(), 2);
        let btc = &response["BTC"];
        assert_eq!(btc.id, 1);
        assert_eq!(btc.category, Some(Category::Coin));
        assert_eq!(btc.tags, vec!["mineable".to_owned(), "pow".to_owned()]);
        assert_eq!(btc.urls.website, vec!["https://bitcoin.org/".to_owned()]);
        assert!(btc.urls.explorer.is_empty());

        let eth = &response["ETH"];
        assert_eq!(eth.id, 1027);
        assert!(eth.tags.is_empty());
        mock.assert();

        Ok(())
    }
}

mod listings {
    use coinmarketcap_sdk::common::SortDir;
    use coinmarketcap_sdk::cryptocurrency::request::{
        ListingsHistoricalRequest, ListingsLatestRequest,
    };
    use coinmarketcap_sdk::cryptocurrency::{CryptocurrencyType, ListingsSort};
    use coinmarketcap_sdk::types::{DateTime, Utc};
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::{client, envelope};

    #[tokio::test]
    async fn listings_latest_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/cryptocurrency/listings/latest")
                .query_param("start", "1")
                .query_param("limit", "2")
                .query_param("convert", "USD,EUR")
                .query_param("sort", "volume_24h")
                .query_param("sort_dir", "desc")
                .query_param("cryptocurrency_type", "coins");
            then.status(StatusCode::OK).json_body(envelope(json!([
                {
                    "id": 1,
                    "name": "Bitcoin",
                    "symbol": "BTC",
                    "slug": "bitcoin",
                    "cmc_rank": 1,
                    "num_market_pairs": 11_000,
                    "circulating_supply": 19_690_000,
                    "total_supply": 19_690_000,
                    "max_supply": 21_000_000,
                    "last_updated": "2024-05-01T12:00:00.000Z",
                    "date_added": "2013-04-28T00:00:00.000Z",
                    "tags": ["mineable"],
                    "platform": null,
                    "quote": {
                        "USD": { "price": 60_123.45, "volume_24h": 3.1e10, "market_cap": 1.18e12 },
                        "EUR": { "price": 56_000.1, "volume_24h": 2.9e10, "market_cap": 1.1e12 }
                    }
                },
                {
                    "id": 1027,
                    "name": "Ethereum",
                    "symbol": "ETH",
                    "slug": "ethereum",
                    "cmc_rank": 2,
                    "max_supply": null,
                    "quote": {
                        "USD": { "price": 3_000.5 },
                        "EUR": { "price": 2_800.25 }
                    }
                }
            ])));
        });

        let request = ListingsLatestRequest::builder()
            .start(1)
            .limit(2)
            .convert(vec!["USD".to_owned(), "EUR".to_owned()])
            .sort(ListingsSort::Volume24h)
            .sort_dir(SortDir::Desc)
            .cryptocurrency_type(CryptocurrencyType::Coins)
            .build();
        let response = client.listings_latest(&request).await?;

        assert_eq!(response.len(), 2);
        assert_eq!(response[0].cmc_rank, Some(1));
        assert_eq!(response[0].max_supply, Some(21_000_000.0));
        assert_eq!(response[0].quote["USD"].price, Some(60_123.45));
        assert_eq!(response[0].quote["EUR"].market_cap, Some(1.1e12));
        assert_eq!(response[1].max_supply, None);
        assert_eq!(response[1].quote.len(), 2);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn listings_historical_should_send_date() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/cryptocurrency/listings/historical")
                .query_param("date", "2024-01-01T00:00:00Z")
                .query_param("limit", "1");
            then.status(StatusCode::OK).json_body(envelope(json!([
                {
                    "id": 1,
                    "name": "Bitcoin",
                    "symbol": "BTC",
                    "slug": "bitcoin",
                    "cmc_rank": 1,
                    "last_updated": "2024-01-01T00:00:00.000Z",
                    "quote": { "USD": { "price": 42_265.19 } }
                }
            ])));
        });

        let date: DateTime<Utc> = "2024-01-01T00:00:00Z".parse()?;
        let request = ListingsHistoricalRequest::builder()
            .date(date)
            .limit(1)
            .build();
        let response = client.listings_historical(&request).await?;

        assert_eq!(response[0].last_updated, Some(date));
        assert_eq!(response[0].quote["USD"].price, Some(42_265.19));
        mock.assert();

        Ok(())
    }
}

mod quotes {
    use coinmarketcap_sdk::cryptocurrency::request::QuotesLatestRequest;
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::{client, envelope};

    #[tokio::test]
    async fn quotes_latest_by_id_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/cryptocurrency/quotes/latest")
                .query_param("id", "1,1027")
                .query_param("convert", "USD");
            then.status(StatusCode::OK).json_body(envelope(json!({
                "1": {
                    "id": 1,
                    "name": "Bitcoin",
                    "symbol": "BTC",
                    "slug": "bitcoin",
                    "is_active": 1,
                    "is_fiat": 0,
                    "cmc_rank": 1,
                    "circulating_supply": 19_690_000,
                    "last_updated": "2024-05-01T12:00:00.000Z",
                    "quote": {
                        "USD": {
                            "price": 60_123.45,
                            "volume_24h": 3.1e10,
                            "percent_change_1h": -0.12,
                            "percent_change_24h": 1.5,
                            "percent_change_7d": -3.25,
                            "market_cap": 1.18e12,
                            "last_updated": "2024-05-01T12:00:00.000Z"
                        }
                    }
                },
                "1027": {
                    "id": 1027,
                    "name": "Ethereum",
                    "symbol": "ETH",
                    "slug": "ethereum",
                    "is_active": 1,
                    "is_fiat": 0,
                    "quote": { "USD": { "price": 3_000.5 } }
                }
            })));
        });

        let request = QuotesLatestRequest::builder()
            .id(vec![1, 1027])
            .convert(vec!["USD".to_owned()])
            .build();
        let response = client.quotes_latest(&request).await?;

        let btc = &response["1"];
        assert_eq!(btc.is_fiat, Some(false));
        assert_eq!(btc.quote["USD"].percent_change_1h, Some(-0.12));
        assert_eq!(btc.quote["USD"].percent_change_7d, Some(-3.25));
        assert_eq!(response["1027"].quote["USD"].price, Some(3_000.5));
        mock.assert();

        Ok(())
    }
}

mod ohlcv {
    use coinmarketcap_sdk::cryptocurrency::OhlcvTimePeriod;
    use coinmarketcap_sdk::cryptocurrency::request::{OhlcvHistoricalRequest, OhlcvLatestRequest};
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::{client, envelope};

    #[tokio::test]
    async fn ohlcv_latest_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/cryptocurrency/ohlcv/latest")
                .query_param("symbol", "BTC");
            then.status(StatusCode::OK).json_body(envelope(json!({
                "BTC": {
                    "id": 1,
                    "name": "Bitcoin",
                    "symbol": "BTC",
                    "last_updated": "2024-05-01T12:05:00.000Z",
                    "time_open": "2024-05-01T00:00:00.000Z",
                    "time_high": "2024-05-01T09:30:00.000Z",
                    "time_low": "2024-05-01T03:10:00.000Z",
                    "time_close": null,
                    "quote": {
                        "USD": {
                            "open": 60_000.0,
                            "high": 61_500.5,
                            "low": 59_000.0,
                            "close": 61_000.0,
                            "volume": 1.5e10,
                            "last_updated": "2024-05-01T12:05:00.000Z"
                        }
                    }
                }
            })));
        });

        let request = OhlcvLatestRequest::builder()
            .symbol(vec!["BTC".to_owned()])
            .build();
        let response = client.ohlcv_latest(&request).await?;

        let candle = &response["BTC"].candle;
        assert!(candle.time_close.is_none());
        assert_eq!(candle.quote["USD"].open, Some(60_000.0));
        assert_eq!(candle.quote["USD"].low, Some(59_000.0));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn ohlcv_historical_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/cryptocurrency/ohlcv/historical")
                .query_param("id", "1")
                .query_param("time_period", "daily")
                .query_param("count", "2")
                .query_param("interval", "daily");
            then.status(StatusCode::OK).json_body(envelope(json!({
                "1": {
                    "id": 1,
                    "name": "Bitcoin",
                    "symbol": "BTC",
                    "quotes": [
                        {
                            "time_open": "2024-04-29T00:00:00.000Z",
                            "time_close": "2024-04-29T23:59:59.999Z",
                            "quote": { "USD": { "open": 63_000.0, "close": 63_800.0, "timestamp": "2024-04-29T23:59:59.999Z" } }
                        },
                        {
                            "time_open": "2024-04-30T00:00:00.000Z",
                            "time_close": "2024-04-30T23:59:59.999Z",
                            "quote": { "USD": { "open": 63_800.0, "close": 60_600.0, "timestamp": "2024-04-30T23:59:59.999Z" } }
                        }
                    ]
                }
            })));
        });

        let request = OhlcvHistoricalRequest::builder()
            .id(vec![1])
            .time_period(OhlcvTimePeriod::Daily)
            .count(2)
            .interval("daily")
            .build();
        let response = client.ohlcv_historical(&request).await?;

        let quotes = &response["1"].quotes;
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[1].quote["USD"].close, Some(60_600.0));
        assert!(quotes[0].time_open < quotes[1].time_open);
        mock.assert();

        Ok(())
    }
}

mod price_performance_stats {
    use coinmarketcap_sdk::cryptocurrency::PerformancePeriod;
    use coinmarketcap_sdk::cryptocurrency::request::PricePerformanceStatsRequest;
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::{client, envelope};

    #[tokio::test]
    async fn price_performance_stats_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/cryptocurrency/price-performance-stats/latest")
                .query_param("slug", "bitcoin")
                .query_param("time_period", "all_time,24h");
            then.status(StatusCode::OK).json_body(envelope(json!({
                "bitcoin": {
                    "id": 1,
                    "name": "Bitcoin",
                    "symbol": "BTC",
                    "slug": "bitcoin",
                    "last_updated": "2024-05-01T12:00:00.000Z",
                    "periods": {
                        "all_time": {
                            "open_timestamp": "2013-04-28T00:00:00.000Z",
                            "quote": { "USD": { "open": 135.3, "high": 73_750.07, "percent_change": 44_330.5 } }
                        },
                        "24h": {
                            "quote": { "USD": { "open": 59_500.0, "close": 60_123.45, "price_change": 623.45 } }
                        }
                    }
                }
            })));
        });

        let request = PricePerformanceStatsRequest::builder()
            .slug(vec!["bitcoin".to_owned()])
            .time_period(vec![PerformancePeriod::AllTime, PerformancePeriod::Day])
            .build();
        let response = client.price_performance_stats(&request).await?;

        let periods = &response["bitcoin"].periods;
        assert_eq!(periods["all_time"].quote["USD"].high, Some(73_750.07));
        assert_eq!(periods["24h"].quote["USD"].price_change, Some(623.45));
        mock.assert();

        Ok(())
    }
}
