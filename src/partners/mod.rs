//! Partner data: Flipside Crypto FCAS (Fundamental Crypto Asset Score) ratings.
//!
//! | Endpoint | Client method |
//! |----------|---------------|
//! | `/v1/partners/flipside-crypto/fcas/listings/latest` | [`Client::fcas_listings_latest`](crate::Client::fcas_listings_latest) |
//! | `/v1/partners/flipside-crypto/fcas/quotes/latest` | [`Client::fcas_quotes_latest`](crate::Client::fcas_quotes_latest) |

pub mod request;
pub mod response;
