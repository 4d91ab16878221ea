//! Exchange endpoints and types.
//!
//! | Endpoint | Client method |
//! |----------|---------------|
//! | `/v1/exchange/map` | [`Client::exchange_map`](crate::Client::exchange_map) |
//! | `/v1/exchange/info` | [`Client::exchange_info`](crate::Client::exchange_info) |
//!
//! # Example
//!
//! ```no_run
//! use coinmarketcap_sdk::{Client, Config};
//! use coinmarketcap_sdk::exchange::request::ExchangeInfoRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::production(Config::builder().api_key("my-api-key".to_owned()).build())?;
//!
//! let request = ExchangeInfoRequest::builder()
//!     .slug(vec!["binance".to_owned(), "kraken".to_owned()])
//!     .build();
//!
//! for (slug, info) in client.exchange_info(&request).await? {
//!     println!("{slug}: launched {:?}", info.date_launched);
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

pub mod request;
pub mod response;

/// Sort field for `/v1/exchange/map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum ExchangeSort {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "volume_24h")]
    Volume24h,
}
