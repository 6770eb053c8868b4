//! Page URL handling: the `region` query parameter, the same-origin API base
//! and the endpoint paths built from them.

use crate::config::ViewConfig;
use crate::frequency::FrequencyHz;

/// The parts of `window.location` the view depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme including the trailing colon, e.g. `https:`
    pub protocol: String,
    pub hostname: String,
    /// Empty when the scheme's default port is used
    pub port: String,
    /// Query string including the leading `?`, or empty
    pub search: String,
}

impl PageLocation {
    /// `{scheme}://{host}[:{port}]` of the page itself.
    pub fn origin(&self) -> String {
        let scheme = self.protocol.trim_end_matches(':');
        if self.port.is_empty() {
            format!("{scheme}://{}", self.hostname)
        } else {
            format!("{scheme}://{}:{}", self.hostname, self.port)
        }
    }

    /// Region requested by the page, falling back to the configured default
    /// when the parameter is absent or empty.
    pub fn region(&self, config: &ViewConfig) -> String {
        query_param(&self.search, "region")
            .filter(|region| !region.is_empty())
            .unwrap_or_else(|| config.default_region.clone())
    }

    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::new(self.origin())
    }
}

/// Builds request URLs against one API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: String,
}

impl ApiEndpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim_end_matches('/').to_string();
        Self { base }
    }

    pub fn region(&self, region: &str) -> String {
        format!("{}/region/{}", self.base, encode_uri_component(region))
    }

    pub fn frequency(&self, frequency: FrequencyHz) -> String {
        format!(
            "{}/frequency/{}",
            self.base,
            encode_uri_component(&frequency.hz().to_string())
        )
    }

    pub fn regions(&self) -> String {
        format!("{}/regions", self.base)
    }

    pub fn stats(&self) -> String {
        format!("{}/stats", self.base)
    }
}

/// Relative link that reloads the page for another region.
pub fn region_link(region: &str) -> String {
    format!("?region={}", encode_uri_component(region))
}

/// First value of `name` in a query string, decoded like `URLSearchParams`.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .strip_prefix('?')
        .unwrap_or(search)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_query_component(key) == name).then(|| decode_query_component(value))
        })
}

/// Percent-encodes everything except the `encodeURIComponent` unreserved set.
pub fn encode_uri_component(value: &str) -> String {
    const UNRESERVED: &[u8] = b"-_.!~*'()";

    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || UNRESERVED.contains(&byte) {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

fn decode_query_component(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'+' => {
                decoded.push(b' ');
                index += 1;
            }
            b'%' => match (bytes.get(index + 1), bytes.get(index + 2)) {
                (Some(high), Some(low)) => match (hex_value(*high), hex_value(*low)) {
                    (Some(high), Some(low)) => {
                        decoded.push((high << 4) | low);
                        index += 3;
                    }
                    _ => {
                        decoded.push(b'%');
                        index += 1;
                    }
                },
                _ => {
                    decoded.push(b'%');
                    index += 1;
                }
            },
            byte => {
                decoded.push(byte);
                index += 1;
            }
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
