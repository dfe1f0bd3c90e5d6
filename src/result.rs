use crate::constants::header;
use crate::headers::{HeaderSink, Headers};

/// Headers and response metadata emitted for either a preflight or simple request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub headers: Headers,
    /// Status to answer a terminated preflight with. `None` leaves the status to the handler.
    pub status: Option<u16>,
    /// When true the caller must answer now and skip the next handler.
    pub end_response: bool,
}

impl CorsResult {
    /// Writes every header into `sink`. `Vary` is appended so existing entries survive.
    pub fn write_to<S: HeaderSink + ?Sized>(&self, sink: &mut S) {
        for (name, value) in &self.headers {
            if name.eq_ignore_ascii_case(header::VARY) {
                sink.append_vary(value);
            } else {
                sink.set_header(name, value);
            }
        }
    }
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// `OPTIONS` with `Access-Control-Request-Method`, whether or not it was accepted.
    Preflight(CorsResult),
    /// Any other request carrying an `Origin`.
    Simple(CorsResult),
    /// No `Origin`: the request is not cross-origin and passes through untouched.
    NotApplicable,
}

impl CorsDecision {
    pub fn result(&self) -> Option<&CorsResult> {
        match self {
            Self::Preflight(result) | Self::Simple(result) => Some(result),
            Self::NotApplicable => None,
        }
    }

    /// Whether the caller should go on to invoke the next handler.
    pub fn should_continue(&self) -> bool {
        match self {
            Self::Preflight(result) => !result.end_response,
            Self::Simple(_) | Self::NotApplicable => true,
        }
    }
}
