use bon::Builder;
use serde::Deserialize;

/// An entry of `/v1/fiat/map`.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct Fiat {
    /// The unique CoinMarketCap ID for this asset.
    pub id: u64,
    pub name: String,
    /// Currency sign, e.g. `$`.
    pub sign: String,
    /// Ticker symbol, always upper case.
    pub symbol: String,
}
