//! Endpoint URLs
//!
//! Path segments and query values are percent-encoded here so ids and
//! search text reach the server verbatim.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

use crate::models::FilterOptions;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Query values escape everything but unreserved characters
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

fn query_string(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn todos_url(base: &str, filters: &FilterOptions) -> String {
    let query = query_string(&filters.query_pairs());
    if query.is_empty() {
        format!("{}/todos", base)
    } else {
        format!("{}/todos?{}", base, query)
    }
}

pub fn todo_url(base: &str, id: &str) -> String {
    format!("{}/todo/{}", base, utf8_percent_encode(id, PATH_SEGMENT))
}

pub fn stats_url(base: &str) -> String {
    format!("{}/stats", base)
}

pub fn search_url(base: &str, query: &str) -> String {
    format!("{}/search?{}", base, query_string(&[("q", query.to_string())]))
}
