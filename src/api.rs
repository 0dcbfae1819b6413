// src/api.rs
//
// Client for the remote employer search service. Separate host from the
// datasets; responses are passed through as JSON values. Only the two
// endpoints the site actually uses are kept.

use crate::config::consts::API_HOST;
use crate::error::Error;
use crate::core::net;

/// GET /{endpoint}?{key}={value} against the search service.
fn api_get(endpoint: &str, key: &str, value: &str) -> Result<serde_json::Value, Error> {
    let path = format!("/{}?{}={}", endpoint, key, urlencode(value));
    let body = net::http_get(API_HOST, &path)
        .map_err(|e| Error::load(format!("api {endpoint}"), e))?;
    serde_json::from_str(&body).map_err(|e| Error::load(format!("api {endpoint}"), e))
}

/// Free-text employer search.
pub fn search_employers(query: &str) -> Result<serde_json::Value, Error> {
    api_get("search", "q", query)
}

/// Detail rows for one employer by name.
pub fn employer_results(employer_name: &str) -> Result<serde_json::Value, Error> {
    api_get("results", "employer", employer_name)
}

/// Minimal query-string escaping; enough for names and search words.
fn urlencode(v: &str) -> String {
    let mut out = s!();
    for b in v.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
