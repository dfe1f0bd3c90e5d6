use crate::constants::{header, method};
use crate::origin::OriginPredicate;
use crate::util::is_http_token;
use thiserror::Error;

/// Configuration consumed once by [`crate::Cors::new`].
#[derive(Clone, Debug)]
pub struct CorsOptions {
    /// Origins allowed to make cross-origin requests. Entries may hold a single `*` wildcard,
    /// and a bare `*` allows every origin. Empty means every origin, unless a predicate is set.
    pub allowed_origins: Vec<String>,
    pub origin_predicate: OriginPredicate,
    /// An explicitly empty list blocks every cross-origin request.
    pub allowed_methods: Vec<String>,
    /// Non-simple headers a preflight may request. `*` accepts any header.
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub allow_private_network: bool,
    /// Seconds a preflight may be cached. `None` omits the header; negative values emit `0`.
    pub max_age: Option<i64>,
    /// Hand preflight requests to the next handler instead of answering them.
    pub options_passthrough: bool,
    pub options_success_status: u16,
    /// Emit `tracing` debug events describing each decision.
    pub debug: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            origin_predicate: OriginPredicate::None,
            allowed_methods: vec![method::GET.into(), method::POST.into()],
            allowed_headers: vec![
                header::ACCEPT.into(),
                header::CONTENT_TYPE.into(),
                header::X_REQUESTED_WITH.into(),
            ],
            exposed_headers: Vec::new(),
            allow_credentials: false,
            allow_private_network: false,
            max_age: None,
            options_passthrough: false,
            options_success_status: 204,
            debug: false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed origins must not contain empty entries")]
    EmptyOrigin,
    #[error("origin pattern `{pattern}` may contain at most one `*` wildcard")]
    InvalidOriginPattern { pattern: String },
    #[error("`{method}` is not a valid HTTP method token")]
    InvalidMethod { method: String },
    #[error("`{name}` is not a valid HTTP header name")]
    InvalidHeaderName { name: String },
    #[error("options success status {status} must be a 2xx status code")]
    InvalidSuccessStatus { status: u16 },
}

impl CorsOptions {
    /// Checks method and header tokens and the preflight status. Origins are checked when
    /// they are compiled.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for value in &self.allowed_methods {
            let trimmed = value.trim();
            if !trimmed.is_empty() && !is_http_token(trimmed) {
                return Err(ValidationError::InvalidMethod {
                    method: value.clone(),
                });
            }
        }

        for value in self.allowed_headers.iter().chain(&self.exposed_headers) {
            let trimmed = value.trim();
            if !trimmed.is_empty() && !is_http_token(trimmed) {
                return Err(ValidationError::InvalidHeaderName {
                    name: value.clone(),
                });
            }
        }

        if !(200..=299).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidSuccessStatus {
                status: self.options_success_status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
