use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::VARY},
    middleware::Next,
    response::{IntoResponse, Response},
};
use cors_policy::{CorsDecision, HeaderSink, RequestContext};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned = OwnedRequest::from_request(&request);
    let decision = owned.with_context(|context| state.cors.check(context));

    match decision {
        CorsDecision::Preflight(result) if result.end_response => {
            let status = result
                .status
                .and_then(|status| StatusCode::from_u16(status).ok())
                .unwrap_or(StatusCode::NO_CONTENT);
            let mut response = (status, Body::empty()).into_response();
            result.write_to(&mut ResponseHeaders(response.headers_mut()));
            response
        }
        CorsDecision::Preflight(result) | CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            result.write_to(&mut ResponseHeaders(response.headers_mut()));
            response
        }
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

/// Adapts an axum `HeaderMap` to the engine's header sink.
struct ResponseHeaders<'a>(&'a mut HeaderMap);

impl HeaderSink for ResponseHeaders<'_> {
    fn set_header(&mut self, name: &str, value: &str) {
        if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::from_str(value)) {
            self.0.insert(name, value);
        }
    }

    fn append_vary(&mut self, value: &str) {
        if let Ok(value) = HeaderValue::from_str(value) {
            self.0.append(VARY, value);
        }
    }
}

/// Header lines copied out of the request so the engine can borrow them as `&str`.
struct OwnedRequest {
    method: String,
    headers: Vec<(String, String)>,
}

impl OwnedRequest {
    fn from_request(request: &Request) -> Self {
        let headers = request
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        Self {
            method: request.method().as_str().to_string(),
            headers,
        }
    }

    fn with_context<T>(&self, f: impl FnOnce(&RequestContext<'_>) -> T) -> T {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        f(&RequestContext::new(&self.method, &headers))
    }
}
