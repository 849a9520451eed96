//! Query string encode/decode helpers
//!
//! [`parse`] turns `a=1&b=2&b=3` into a [`QueryData`] mapping and [`stringify`]
//! goes back the other way. Both are total: malformed pairs are dropped, never
//! reported.

mod data;

use tracing::{debug, trace};

pub use data::{QueryData, QueryValue};

/// Parses a query string (without the leading `?`) into key/value pairs.
///
/// Pairs missing a `=`, pairs whose key or value decodes to an empty string
/// and pairs that are not valid percent-encoded UTF-8 are skipped. Repeated
/// keys collect their values, in input order, into [`QueryValue::Multiple`].
pub fn parse(query_string: &str) -> QueryData {
    let mut data = QueryData::new();

    for piece in query_string.split('&') {
        let Some((raw_key, raw_value)) = piece.split_once('=') else {
            trace!("Skipping query piece without '=': {:?}", piece);
            continue;
        };

        let (key, value) = match (urlencoding::decode(raw_key), urlencoding::decode(raw_value)) {
            (Ok(key), Ok(value)) => (key, value),
            _ => {
                debug!("Skipping query pair that does not decode to UTF-8: {:?}", piece);
                continue;
            }
        };

        if key.is_empty() || value.is_empty() {
            trace!("Skipping query pair with an empty side: {:?}", piece);
            continue;
        }

        data.append(key.into_owned(), value.into_owned());
    }

    debug!("Parsed {} query keys", data.len());
    data
}

/// Joins query data back into `key=value` pairs separated by `&`.
///
/// Values are written as-is, without percent-encoding. Empty entries of a
/// [`QueryValue::Multiple`] are skipped.
pub fn stringify(data: &QueryData) -> String {
    let mut pairs = Vec::new();

    for (key, value) in data {
        for item in value.as_slice() {
            if matches!(value, QueryValue::Multiple(_)) && item.is_empty() {
                continue;
            }
            pairs.push(format!("{}={}", key, item));
        }
    }

    pairs.join("&")
}
