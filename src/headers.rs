use crate::constants::header;
use crate::util::trim_ows;
use indexmap::IndexMap;

/// Response headers in the order they were produced.
pub type Headers = IndexMap<String, String>;

/// Destination for the headers of a [`crate::CorsResult`], typically the caller's response.
pub trait HeaderSink {
    /// Replaces any existing value of `name`.
    fn set_header(&mut self, name: &str, value: &str);

    /// Adds `value` (possibly a comma-separated list) to `Vary`, keeping entries already present.
    fn append_vary(&mut self, value: &str);
}

impl HeaderSink for Headers {
    fn set_header(&mut self, name: &str, value: &str) {
        let key = existing_key(self, name).unwrap_or_else(|| name.to_owned());
        self.insert(key, value.to_owned());
    }

    fn append_vary(&mut self, value: &str) {
        let key = existing_key(self, header::VARY).unwrap_or_else(|| header::VARY.to_owned());

        match merge_vary(self.get(&key).map(String::as_str), value) {
            Some(merged) => {
                self.insert(key, merged);
            }
            None => {
                self.shift_remove(&key);
            }
        }
    }
}

/// Field names compare case-insensitively, so an existing spelling wins.
fn existing_key(headers: &Headers, name: &str) -> Option<String> {
    headers
        .keys()
        .find(|key| key.eq_ignore_ascii_case(name))
        .cloned()
}

/// Appends the entries of `incoming` to `existing`, dropping case-insensitive duplicates and
/// keeping first-seen order. Returns `None` when nothing remains.
pub(crate) fn merge_vary(existing: Option<&str>, incoming: &str) -> Option<String> {
    let mut entries: Vec<&str> = Vec::new();
    let candidates = existing
        .into_iter()
        .flat_map(|value| value.split(','))
        .chain(incoming.split(','));

    for candidate in candidates {
        let candidate = trim_ows(candidate);
        if candidate.is_empty()
            || entries
                .iter()
                .any(|entry| entry.eq_ignore_ascii_case(candidate))
        {
            continue;
        }
        entries.push(candidate);
    }

    (!entries.is_empty()).then(|| entries.join(", "))
}

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(8)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: String, value: String) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name, value);
        }
    }

    pub(crate) fn add_vary<S: AsRef<str>>(&mut self, value: S) {
        self.headers.append_vary(value.as_ref());
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
