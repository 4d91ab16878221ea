//! Global market metrics endpoints and types.
//!
//! | Endpoint | Client method |
//! |----------|---------------|
//! | `/v1/global-metrics/quotes/latest` | [`Client::global_metrics_latest`](crate::Client::global_metrics_latest) |
//! | `/v1/global-metrics/quotes/historical` | [`Client::global_metrics_historical`](crate::Client::global_metrics_historical) |

pub mod request;
pub mod response;
