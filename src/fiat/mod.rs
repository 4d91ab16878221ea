//! Fiat endpoints and types.
//!
//! | Endpoint | Client method |
//! |----------|---------------|
//! | `/v1/fiat/map` | [`Client::fiat_map`](crate::Client::fiat_map) |

use serde::Serialize;

pub mod request;
pub mod response;

/// Sort field for `/v1/fiat/map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum FiatSort {
    Id,
    Name,
}
