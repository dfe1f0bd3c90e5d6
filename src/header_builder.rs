use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::origin::OriginMatch;
use crate::policy::Policy;
use crate::util::trim_ows;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a Policy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a Policy) -> Self {
        Self { policy }
    }

    /// Fields the decision depends on, recorded before any check so denials are cached correctly.
    pub(crate) fn build_vary(&self, preflight: bool) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.add_vary(header::ORIGIN);
        if preflight {
            headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
            headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
            if self.policy.allow_private_network {
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK);
            }
        }
        headers
    }

    pub(crate) fn build_extra_vary(&self, fields: &[String]) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        for field in fields {
            headers.add_vary(field);
        }
        headers
    }

    pub(crate) fn build_origin_header(&self, matched: &OriginMatch, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
            self.policy.allow_origin_value(matched, origin).to_string(),
        );
        headers
    }

    /// Echoes the requested method as sent rather than listing every allowed one.
    ///
    /// Browsers compare this value case-sensitively for non-standard methods.
    pub(crate) fn build_methods_header(&self, requested: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS.to_string(),
            trim_ows(requested).to_string(),
        );
        headers
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        match self
            .policy
            .allowed_headers
            .header_value(request.access_control_request_headers())
        {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS.to_string(), value);
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.policy.allow_credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS.to_string(),
                "true".to_string(),
            );
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_private_network_header(
        &self,
        request: &RequestContext<'_>,
    ) -> HeaderCollection {
        if self.policy.allow_private_network && request.access_control_request_private_network() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_ALLOW_PRIVATE_NETWORK.to_string(),
                "true".to_string(),
            );
            return headers;
        }
        HeaderCollection::new()
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        if let Some(value) = &self.policy.exposed_headers {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS.to_string(), value.clone());
            return headers;
        }
        HeaderCollection::new()
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if let Some(value) = &self.policy.max_age {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_MAX_AGE.to_string(), value.clone());
            return headers;
        }
        HeaderCollection::new()
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
