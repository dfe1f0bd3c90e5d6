#![allow(dead_code)]

use cors_policy::Headers;
use cors_policy::constants::header;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

/// `Vary` entries in emitted order.
pub fn vary_values(headers: &Headers) -> Vec<String> {
    header_value(headers, header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Names of every `Access-Control-*` header present.
pub fn access_control_headers(headers: &Headers) -> Vec<&str> {
    headers
        .keys()
        .map(String::as_str)
        .filter(|name| name.starts_with("Access-Control-"))
        .collect()
}
