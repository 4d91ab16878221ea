#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use super::FiatSort;
use crate::common::start_is_unset;

/// Request parameters for `/v1/fiat/map`.
///
/// # Example
///
/// ```
/// use coinmarketcap_sdk::fiat::FiatSort;
/// use coinmarketcap_sdk::fiat::request::FiatMapRequest;
///
/// let request = FiatMapRequest::builder()
///     .sort(FiatSort::Name)
///     .include_metals(true)
///     .build();
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct FiatMapRequest {
    /// 1-based offset of the first item to return.
    #[serde(skip_serializing_if = "start_is_unset")]
    pub start: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<FiatSort>,
    /// Include precious metals (gold, silver, ...) alongside fiat currencies.
    pub include_metals: Option<bool>,
}
