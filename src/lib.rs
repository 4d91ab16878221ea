#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod client;
pub mod common;
pub mod cryptocurrency;
pub mod error;
pub mod exchange;
pub mod fiat;
pub mod global_metrics;
pub mod partners;
pub(crate) mod serde_helpers;
pub mod types;

use reqwest::{Request, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use crate::client::{Client, Config};
use crate::common::Envelope;
use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Production CoinMarketCap Pro API host.
pub const PRODUCTION_HOST: &str = "https://pro-api.coinmarketcap.com";

/// Sandbox host. Serves mock data and accepts the public sandbox key.
pub const SANDBOX_HOST: &str = "https://sandbox-api.coinmarketcap.com";

/// Conventional environment variable holding the API key. The library itself never reads it.
pub const API_KEY_VAR: &str = "CMC_PRO_API_KEY";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
/// Unset (`None`) fields are skipped by the request types themselves, and list fields
/// are joined with commas before they reach the encoder.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string without the leading `?`.
    ///
    /// Returns an empty string if no parameters are set.
    fn query_params(&self) -> Result<String> {
        Ok(serde_html_form::to_string(self)?)
    }
}

impl<T: Serialize> ToQueryParams for T {}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    request: Request,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    #[cfg(feature = "tracing")]
    tracing::debug!(url = %request.url(), "sending request");

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if status_code != StatusCode::OK {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    let body = response.bytes().await?;
    let json_value = serde_json::from_slice::<serde_json::Value>(&body)?;
    let envelope: Envelope<Response> = serde_helpers::deserialize_with_warnings(json_value)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(
        credit_count = envelope.status.credit_count,
        elapsed = envelope.status.elapsed,
        "request completed"
    );

    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Pair {
        symbol: &'static str,
        limit: u32,
    }

    #[test]
    fn query_params_joins_fields() {
        let pair = Pair {
            symbol: "BTC",
            limit: 10,
        };

        assert_eq!(pair.query_params().expect("encode"), "symbol=BTC&limit=10");
    }

    #[derive(Serialize)]
    struct Unset {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    }

    #[test]
    fn unset_fields_encode_to_empty_string() {
        let unset = Unset { limit: None };

        assert_eq!(unset.query_params().expect("encode"), "");
    }

    #[test]
    fn hosts_are_valid_urls() {
        url::Url::parse(PRODUCTION_HOST).expect("production host");
        url::Url::parse(SANDBOX_HOST).expect("sandbox host");
    }
}
