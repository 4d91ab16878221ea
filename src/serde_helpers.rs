//! Serde helpers for response decoding.
//!
//! When the `tracing` feature is enabled, unknown fields in API responses are logged as
//! warnings and decode failures are logged with the JSON path that failed. CoinMarketCap
//! adds fields to its payloads without notice, so unknown fields never fail a decode.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize JSON, warning about every field the target type does not capture.
///
/// ```ignore
/// let json = serde_json::json!({ "status": { .. }, "data": { "btc_dominance": 45.2, "new": 1 } });
/// let envelope: Envelope<GlobalMetricsQuotesLatest> = deserialize_with_warnings(json)?;
/// // WARN unknown field in API response field="data.new" value="1"
/// ```
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    let type_name = type_name::<T>();
    tracing::trace!(type_name = %type_name, json = %value, "deserializing JSON");

    let original = value.clone();
    let mut unknown_paths: Vec<String> = Vec::new();

    let result: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_| {
        // Decode a second time only to recover the failing path for the log line
        let path_result: Result<T, _> = serde_path_to_error::deserialize(&original);
        if let Err(path_err) = path_result {
            let path = path_err.path().to_string();
            tracing::error!(
                type_name = %type_name,
                path = %path,
                value = %format_value(lookup_value(&original, &path)),
                error = %path_err.inner(),
                "deserialization failed"
            );
        }
    })?;

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name,
            field = %path,
            value = %format_value(lookup_value(&original, &path)),
            "unknown field in API response"
        );
    }

    Ok(result)
}

/// Pass-through deserialization when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Resolve a `serde_ignored` / `serde_path_to_error` path such as `data.BTC.quote.USD`
/// or `data[3].platform` against a JSON value.
///
/// `?` segments (Option wrappers) carry no JSON structure and are skipped.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    value.pointer(&to_json_pointer(path))
}

/// Rewrite a dotted/bracketed path into an RFC 6901 JSON pointer.
#[cfg(feature = "tracing")]
fn to_json_pointer(path: &str) -> String {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty() && *segment != "?")
        .fold(String::new(), |mut pointer, segment| {
            pointer.push('/');
            pointer.push_str(&segment.replace('~', "~0").replace('/', "~1"));
            pointer
        })
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}
