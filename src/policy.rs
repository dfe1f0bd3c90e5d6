use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::method;
use crate::header_set::canonicalize_header_name;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::{AllowedOrigins, OriginMatch, OriginMatcher};

/// Normalized form of [`CorsOptions`]. Built once, then only read.
#[derive(Debug, Clone)]
pub(crate) struct Policy {
    pub(crate) origins: OriginMatcher,
    pub(crate) methods: AllowedMethods,
    pub(crate) allowed_headers: AllowedHeaders,
    pub(crate) exposed_headers: Option<String>,
    pub(crate) allow_credentials: bool,
    pub(crate) allow_private_network: bool,
    pub(crate) max_age: Option<String>,
    pub(crate) options_passthrough: bool,
    pub(crate) options_success_status: u16,
    pub(crate) debug: bool,
}

impl Policy {
    pub(crate) fn from_options(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        let origins = if options.allowed_origins.is_empty() && options.origin_predicate.is_none()
        {
            AllowedOrigins::any()
        } else {
            AllowedOrigins::parse(&options.allowed_origins)?
        };

        Ok(Self::build(options, origins))
    }

    /// Every origin, the common methods and any header.
    pub(crate) fn allow_all() -> Self {
        let options = CorsOptions {
            allowed_methods: [
                method::HEAD,
                method::GET,
                method::POST,
                method::PUT,
                method::PATCH,
                method::DELETE,
            ]
            .map(String::from)
            .to_vec(),
            allowed_headers: vec!["*".into()],
            ..CorsOptions::default()
        };

        Self::build(options, AllowedOrigins::any())
    }

    fn build(options: CorsOptions, origins: AllowedOrigins) -> Self {
        let CorsOptions {
            allowed_origins: _,
            origin_predicate,
            allowed_methods,
            allowed_headers,
            exposed_headers,
            allow_credentials,
            allow_private_network,
            max_age,
            options_passthrough,
            options_success_status,
            debug,
        } = options;

        let mut exposed: Vec<String> = Vec::with_capacity(exposed_headers.len());
        for name in &exposed_headers {
            let canonical = canonicalize_header_name(name);
            if !canonical.is_empty() && !exposed.contains(&canonical) {
                exposed.push(canonical);
            }
        }

        Self {
            origins: OriginMatcher::new(origins, origin_predicate),
            methods: AllowedMethods::list(&allowed_methods),
            allowed_headers: AllowedHeaders::from_config(&allowed_headers),
            exposed_headers: (!exposed.is_empty()).then(|| exposed.join(", ")),
            allow_credentials,
            allow_private_network,
            max_age: max_age.map(|seconds| seconds.max(0).to_string()),
            options_passthrough,
            options_success_status,
            debug,
        }
    }

    /// An empty method list blocks every cross-origin request, `OPTIONS` included.
    pub(crate) fn allows_method(&self, requested: &str) -> bool {
        !self.methods.is_empty() && self.methods.is_allowed(requested)
    }

    /// `*` for match-all without credentials, otherwise the request origin verbatim.
    pub(crate) fn allow_origin_value<'r>(&self, matched: &OriginMatch, origin: &'r str) -> &'r str {
        if matched.any && !self.allow_credentials {
            "*"
        } else {
            origin
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::build(CorsOptions::default(), AllowedOrigins::any())
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
