//! Accessors for http(s) links
//!
//! [`Href`] percent-encodes a link, checks it against [`HREF_REGEX`] and keeps
//! the six captured components around for cheap, borrowed reads.

mod encoding;
mod pattern;
#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, error, instrument, trace};

use crate::error::{Error, Result};
use crate::query::{self, QueryData};

pub use encoding::{decode_component, encode_uri};
pub use pattern::{HREF_PATTERN, HREF_REGEX};

/// Returns true when the raw, unencoded `url` matches [`HREF_REGEX`]
///
/// Unlike [`Href::new`] no percent-encoding happens first, so a link holding
/// a line break is rejected here.
pub fn is_href(url: &str) -> bool {
    HREF_REGEX.is_match(url)
}

/// An http(s) link split into its components
///
/// The components are taken from the percent-encoded form of the link.
/// `query` and `fragment` are decoded back so callers see the original text;
/// `host` and `path` are returned as encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Href {
    #[serde(rename = "url")]
    normalized_url: String,
    protocol: Option<String>,
    host: String,
    port: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Href {
    /// Parses an absolute http(s) link, or a scheme-less one starting with `//`
    ///
    /// This function performs the following steps:
    /// 1. Percent-encodes every character that may not appear verbatim in a link
    /// 2. Matches the encoded link against [`HREF_REGEX`]
    /// 3. Splits the six capture groups into components
    /// 4. Decodes the query string and fragment back to their original text
    ///
    /// # Arguments
    /// * `url` - Absolute link such as `https://host:8080/path?q=1#top`, or `//host/path`
    ///
    /// # Returns
    /// * `Result<Href>` - The parsed link, or an error
    ///
    /// # Errors
    /// * [`Error::InvalidUrlFormat`] - the encoded link does not match [`HREF_REGEX`]
    #[instrument(level = "trace", skip_all, fields(url = %url))]
    pub fn new(url: &str) -> Result<Self> {
        // Encode first so the pattern only ever sees URI-safe characters
        let normalized_url = encode_uri(url).into_owned();
        trace!("Normalized link: {}", normalized_url);

        let (protocol, host, port, path, query, fragment) = {
            let captures = match HREF_REGEX.captures(&normalized_url) {
                Some(captures) => captures,
                None => {
                    error!("Link does not match the href pattern: {}", url);
                    return Err(Error::InvalidUrlFormat {
                        url: url.to_string(),
                        pattern: HREF_PATTERN,
                    });
                }
            };
            // Groups: scheme, host, :port, path, ?query, #fragment
            let group = |i: usize| captures.get(i).map_or("", |m| m.as_str());

            (
                group(1).strip_suffix("://").map(str::to_string),
                group(2).to_string(),
                non_empty(group(3).trim_start_matches(':')).map(str::to_string),
                group(4).to_string(),
                first_run(group(5), '?').map(|q| decode_component(q).into_owned()),
                first_run(group(6), '#').map(|f| decode_component(f).into_owned()),
            )
        };

        debug!(
            "Parsed link: protocol={:?} host={} port={:?} path={:?} query={:?} fragment={:?}",
            protocol, host, port, path, query, fragment
        );

        Ok(Href {
            normalized_url,
            protocol,
            host,
            port,
            path,
            query,
            fragment,
        })
    }

    /// Scheme without `://`, e.g. `https`; `None` for links starting with `//`
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    /// Domain name or IP literal, e.g. `www.baidu.com`, `localhost`, `192.168.0.14`
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port digits, e.g. `8000`
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Everything between the port and the query string.
    ///
    /// Empty when the link has no path at all, `/` when the path is a lone slash.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded query string without the leading `?`, e.g. `resid=abc&page=Edit`
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Decoded fragment without the leading `#`
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Query string parsed into key/value pairs; empty when there is no query
    pub fn query_data(&self) -> QueryData {
        self.query().map(query::parse).unwrap_or_default()
    }

    /// The percent-encoded link this value was built from
    pub fn as_str(&self) -> &str {
        &self.normalized_url
    }
}

// First run of characters other than `delimiter`, so `??a=1?b=2` yields `a=1`.
// A group holding nothing but delimiters counts as absent.
fn first_run(group: &str, delimiter: char) -> Option<&str> {
    group.split(delimiter).find(|run| !run.is_empty())
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized_url)
    }
}

impl FromStr for Href {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Href::new(s)
    }
}

impl TryFrom<&str> for Href {
    type Error = Error;

    fn try_from(url: &str) -> Result<Self> {
        Href::new(url)
    }
}

impl TryFrom<String> for Href {
    type Error = Error;

    fn try_from(url: String) -> Result<Self> {
        Href::new(&url)
    }
}

impl AsRef<str> for Href {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
