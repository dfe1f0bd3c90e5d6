use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::policy::Policy;
use crate::result::{CorsDecision, CorsResult};

const LOG_TARGET: &str = "cors_policy";

/// Core CORS policy engine that evaluates requests against a validated [`CorsOptions`].
///
/// The engine is immutable once built and can be shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Cors {
    policy: Policy,
}

/// Why a request left the allow path. Only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    MissingOrigin,
    Origin,
    Method,
    Headers,
}

impl Rejection {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingOrigin => "missing origin",
            Self::Origin => "origin not allowed",
            Self::Method => "method not allowed",
            Self::Headers => "headers not allowed",
        }
    }
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            policy: Policy::from_options(options)?,
        })
    }

    /// Permissive engine: every origin, the common methods and any requested header.
    pub fn allow_all() -> Self {
        Self {
            policy: Policy::allow_all(),
        }
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        if request.is_preflight() {
            return CorsDecision::Preflight(self.process_preflight(request));
        }

        match self.process_simple(request) {
            Some(result) => CorsDecision::Simple(result),
            None => CorsDecision::NotApplicable,
        }
    }

    /// Whether the request carries an `Origin` the policy accepts.
    pub fn is_origin_allowed(&self, request: &RequestContext<'_>) -> bool {
        request
            .origin()
            .is_some_and(|origin| self.policy.origins.matches(request, origin).allowed)
    }

    fn process_preflight(&self, request: &RequestContext<'_>) -> CorsResult {
        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = builder.build_vary(true);

        self.log(format_args!(
            "preflight request: method={:?} origin={:?}",
            request.access_control_request_method(),
            request.origin()
        ));

        if let Err(rejection) = self.authorize_preflight(&builder, request, &mut headers) {
            self.log_rejection(rejection);
        }

        let headers = headers.into_headers();
        self.log(format_args!("preflight response headers: {headers:?}"));

        if self.policy.options_passthrough {
            CorsResult {
                headers,
                status: None,
                end_response: false,
            }
        } else {
            CorsResult {
                headers,
                status: Some(self.policy.options_success_status),
                end_response: true,
            }
        }
    }

    fn authorize_preflight(
        &self,
        builder: &HeaderBuilder<'_>,
        request: &RequestContext<'_>,
        headers: &mut HeaderCollection,
    ) -> Result<(), Rejection> {
        let origin = request.origin().ok_or(Rejection::MissingOrigin)?;
        let matched = self.policy.origins.matches(request, origin);
        headers.extend(builder.build_extra_vary(&matched.vary));
        if !matched.allowed {
            return Err(Rejection::Origin);
        }

        let requested_method = request
            .access_control_request_method()
            .ok_or(Rejection::Method)?;
        if !self.policy.allows_method(requested_method) {
            return Err(Rejection::Method);
        }

        if !self
            .policy
            .allowed_headers
            .allows_headers(request.access_control_request_headers())
        {
            return Err(Rejection::Headers);
        }

        headers.extend(builder.build_origin_header(&matched, origin));
        headers.extend(builder.build_methods_header(requested_method));
        headers.extend(builder.build_allowed_headers(request));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_private_network_header(request));
        headers.extend(builder.build_max_age_header());
        Ok(())
    }

    /// `None` when the request has no `Origin` and is therefore not cross-origin.
    fn process_simple(&self, request: &RequestContext<'_>) -> Option<CorsResult> {
        let Some(origin) = request.origin() else {
            self.log_rejection(Rejection::MissingOrigin);
            return None;
        };

        self.log(format_args!(
            "actual request: method={:?} origin={origin:?}",
            request.method
        ));

        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = builder.build_vary(false);

        let matched = self.policy.origins.matches(request, origin);
        headers.extend(builder.build_extra_vary(&matched.vary));

        if !matched.allowed {
            self.log_rejection(Rejection::Origin);
        } else if !self.policy.allows_method(request.method) {
            self.log_rejection(Rejection::Method);
        } else {
            headers.extend(builder.build_origin_header(&matched, origin));
            headers.extend(builder.build_exposed_headers());
            headers.extend(builder.build_credentials_header());
        }

        let headers = headers.into_headers();
        self.log(format_args!("actual response headers: {headers:?}"));

        Some(CorsResult {
            headers,
            status: None,
            end_response: false,
        })
    }

    fn log(&self, message: std::fmt::Arguments<'_>) {
        if self.policy.debug {
            tracing::debug!(target: LOG_TARGET, "{message}");
        }
    }

    fn log_rejection(&self, rejection: Rejection) {
        if self.policy.debug {
            tracing::debug!(target: LOG_TARGET, reason = rejection.as_str(), "request rejected");
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
