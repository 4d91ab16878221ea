use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A Fundamental Crypto Asset Score for one cryptocurrency.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct FcasRating {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    /// Score from 0 to 1000.
    pub score: u32,
    /// Letter grade derived from the score (`S`, `A`, `B`, `C` or `F`).
    pub grade: String,
    pub percent_change_24h: Option<f64>,
    pub point_change_24h: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}
