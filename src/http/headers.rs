//! Header filtering and target URL construction.
//!
//! Pure functions only; everything here is exercised per-request by the
//! relay handler and unit-tested in isolation.

use axum::http::header::{HeaderMap, HeaderValue};

/// Headers never forwarded to the upstream, case-insensitive.
///
/// `host`, `connection` and `transfer-encoding` are hop-by-hop: they
/// describe the browser→relay connection, not the relay→upstream one.
/// `accept-encoding` is stripped so the outbound transport negotiates its
/// own content coding. `content-length` is stripped because the outbound
/// client re-frames the body it is given.
const EXCLUDED_HEADERS: &[&str] = &[
    "host",
    "connection",
    "transfer-encoding",
    "accept-encoding",
    "content-length",
];

/// Whether a header must not be forwarded. The target-origin header itself
/// is also excluded: it addresses the relay, not the upstream.
pub fn is_excluded(name: &str, target_header: &str) -> bool {
    name.eq_ignore_ascii_case(target_header)
        || EXCLUDED_HEADERS.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// Copy the forwardable subset of `inbound`, joining multi-valued headers
/// with `", "` so each name maps to a single outbound value.
pub fn forwardable_headers(inbound: &HeaderMap, target_header: &str) -> HeaderMap {
    let mut outbound = HeaderMap::with_capacity(inbound.len());

    for name in inbound.keys() {
        if is_excluded(name.as_str(), target_header) {
            continue;
        }

        let values: Vec<&HeaderValue> = inbound.get_all(name).iter().collect();
        let joined = match values.as_slice() {
            [single] => Some((*single).clone()),
            many => {
                let mut bytes = Vec::new();
                for (i, value) in many.iter().enumerate() {
                    if i > 0 {
                        bytes.extend_from_slice(b", ");
                    }
                    bytes.extend_from_slice(value.as_bytes());
                }
                HeaderValue::from_bytes(&bytes).ok()
            }
        };

        if let Some(value) = joined {
            outbound.insert(name.clone(), value);
        }
    }

    outbound
}

/// Join a target base URL and a sub-path into the outbound URL.
///
/// Trailing slashes on the base are stripped and a joining slash inserted
/// when the sub-path lacks one, so the seam never carries a double slash.
pub fn build_target_url(base: &str, sub_path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let mut url = String::with_capacity(base.len() + sub_path.len() + 1);
    url.push_str(base);
    if !sub_path.is_empty() && !sub_path.starts_with('/') {
        url.push('/');
    }
    url.push_str(sub_path);
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Render a lowercase header name the way it is conventionally written,
/// e.g. `x-target-base` → `X-Target-Base`. Used in error messages only.
pub fn display_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
