#![allow(dead_code)]

use cors_policy::constants::{header, method};
use cors_policy::{Cors, CorsDecision, CorsOptions, OriginPredicate, RequestContext};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn predicate(mut self, predicate: OriginPredicate) -> Self {
        self.options.origin_predicate = predicate;
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.allow_credentials = enabled;
        self
    }

    pub fn private_network(mut self, enabled: bool) -> Self {
        self.options.allow_private_network = enabled;
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.options.max_age = Some(seconds);
        self
    }

    pub fn passthrough(mut self, enabled: bool) -> Self {
        self.options.options_passthrough = enabled;
        self
    }

    pub fn success_status(mut self, status: u16) -> Self {
        self.options.options_success_status = status;
        self
    }

    pub fn options(self) -> CorsOptions {
        self.options
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options).expect("valid CORS configuration")
    }
}

/// Owned request used to build a borrowed [`RequestContext`] on demand.
#[derive(Clone)]
pub struct RequestBuilder {
    method: String,
    headers: Vec<(String, String)>,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn origin(self, origin: impl Into<String>) -> Self {
        self.header(header::ORIGIN, origin)
    }

    pub fn request_method(self, method: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
    }

    pub fn request_headers(self, headers: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_HEADERS, headers)
    }

    pub fn private_network(self, value: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK, value)
    }

    pub fn with_context<T>(&self, f: impl FnOnce(&RequestContext<'_>) -> T) -> T {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        let request = RequestContext::new(&self.method, &headers);
        f(&request)
    }

    pub fn check(&self, cors: &Cors) -> CorsDecision {
        self.with_context(|request| cors.check(request))
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
