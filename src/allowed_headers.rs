use crate::constants::header;
use crate::header_set::{HeaderAllowSet, visit_elements};

/// Configuration for the headers a preflight may request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    List(HeaderAllowSet),
    /// Wildcard: every requested header is accepted, within the empty-element bound, and
    /// echoed back on preflight.
    Any,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::list([header::ACCEPT, header::CONTENT_TYPE, header::X_REQUESTED_WITH])
    }
}

impl AllowedHeaders {
    /// Builds an allow-list. `Origin` is always added since some browsers request it.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = values
            .into_iter()
            .map(|value| value.as_ref().to_owned())
            .chain(std::iter::once(header::ORIGIN.to_owned()))
            .collect();

        Self::List(HeaderAllowSet::new(names))
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Interprets a configured list: a `*` entry anywhere turns it into [`Self::Any`].
    pub fn from_config<S: AsRef<str>>(values: &[S]) -> Self {
        if values.iter().any(|value| value.as_ref().trim() == "*") {
            Self::Any
        } else {
            Self::list(values)
        }
    }

    pub fn allows_headers<I, S>(&self, field_lines: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self {
            Self::Any => visit_elements(field_lines, |_| true),
            Self::List(set) => set.accepts(field_lines),
        }
    }

    /// Value for `Access-Control-Allow-Headers` once a preflight has been accepted.
    ///
    /// A list serializes the configured set. The wildcard echoes the requested elements joined
    /// by `, `, or emits nothing when the request named no headers.
    pub fn header_value<I, S>(&self, field_lines: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self {
            Self::List(set) if set.is_empty() => None,
            Self::List(set) => Some(set.serialized().to_owned()),
            Self::Any => {
                let mut elements: Vec<String> = Vec::new();
                let within_bound = visit_elements(field_lines, |element| {
                    elements.push(element.to_owned());
                    true
                });
                (within_bound && !elements.is_empty()).then(|| elements.join(", "))
            }
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
