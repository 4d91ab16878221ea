#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Not every test binary uses every helper"
)]

use coinmarketcap_sdk::{Client, Config};
use httpmock::MockServer;
use serde_json::{Value, json};

pub const API_KEY: &str = "b54bcf4d-1bca-4e8e-9a24-22ff2c3d462c";

pub fn client(server: &MockServer) -> Client {
    let config = Config::builder().api_key(API_KEY.to_owned()).build();
    Client::new(&server.base_url(), config).unwrap()
}

/// Wraps `data` in the `{status, data}` envelope the API returns on success.
pub fn envelope(data: Value) -> Value {
    json!({
        "status": {
            "timestamp": "2024-05-01T12:00:00.000Z",
            "error_code": 0,
            "error_message": null,
            "elapsed": 10,
            "credit_count": 1,
            "notice": null
        },
        "data": data
    })
}

/// The envelope the API returns alongside a non-200 status.
pub fn error_envelope(error_code: u16, error_message: &str) -> Value {
    json!({
        "status": {
            "timestamp": "2024-05-01T12:00:00.000Z",
            "error_code": error_code,
            "error_message": error_message,
            "elapsed": 0,
            "credit_count": 0
        }
    })
}
