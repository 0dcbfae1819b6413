// src/core/url.rs
//
// Link normalization for employer contact/careers fields. The datasets
// store bare hosts ("example.com/jobs") as often as full URLs.

/// Prefix `https://` unless the value already carries an http(s) scheme.
/// Empty/blank values carry no link at all.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Some(s!(trimmed));
    }
    Some(format!("https://{trimmed}"))
}
