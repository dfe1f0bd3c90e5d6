use crate::constants::{header, method};
use crate::util::trim_ows;

/// Read-only view of an inbound request: its method plus the raw header lines in wire order.
///
/// Header names are matched case-insensitively. Repeated lines are kept as separate entries,
/// so list-based fields such as `Access-Control-Request-Headers` can be consumed in full.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub headers: &'a [(&'a str, &'a str)],
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, headers: &'a [(&'a str, &'a str)]) -> Self {
        Self { method, headers }
    }

    /// First value of `name`, if the request carries it.
    pub fn header(&self, name: &str) -> Option<&'a str> {
        self.header_values(name).next()
    }

    /// Every value of `name`, in the order the lines were received.
    pub fn header_values(&self, name: &str) -> impl Iterator<Item = &'a str> {
        let headers = self.headers;
        headers
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }

    /// The `Origin` value. An empty value is treated as absent.
    pub fn origin(&self) -> Option<&'a str> {
        self.header(header::ORIGIN).filter(|value| !value.is_empty())
    }

    pub fn access_control_request_method(&self) -> Option<&'a str> {
        self.header(header::ACCESS_CONTROL_REQUEST_METHOD)
            .filter(|value| !value.is_empty())
    }

    pub fn access_control_request_headers(&self) -> impl Iterator<Item = &'a str> {
        self.header_values(header::ACCESS_CONTROL_REQUEST_HEADERS)
    }

    pub fn access_control_request_private_network(&self) -> bool {
        self.header(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK)
            .is_some_and(|value| trim_ows(value).eq_ignore_ascii_case("true"))
    }

    pub fn is_options(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }

    /// An `OPTIONS` request carrying `Access-Control-Request-Method`.
    pub fn is_preflight(&self) -> bool {
        self.is_options() && self.access_control_request_method().is_some()
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
