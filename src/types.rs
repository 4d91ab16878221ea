//! Re-exported types from external crates for convenience.
//!
//! These types are commonly used in this SDK and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Date and time types for timestamps in requests and API responses.
pub use chrono::{DateTime, Utc};
/// Secret string type that redacts the API key in debug output.
pub use secrecy::{ExposeSecret, SecretString};
