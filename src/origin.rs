use crate::context::RequestContext;
use crate::options::ValidationError;
use crate::util::normalize_lower;
use crate::wildcard::Wildcard;
use indexmap::IndexSet;
use std::fmt;
use std::sync::Arc;

pub type OriginFn = dyn Fn(&str) -> bool + Send + Sync;
pub type OriginRequestFn = dyn for<'a> Fn(&RequestContext<'a>, &str) -> bool + Send + Sync;
pub type OriginVaryRequestFn =
    dyn for<'a> Fn(&RequestContext<'a>, &str) -> (bool, Vec<String>) + Send + Sync;

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Caller-supplied origin decision, consulted after the configured origins fail to match.
///
/// Predicates receive the origin exactly as sent, without lowercasing.
#[derive(Clone, Default)]
pub enum OriginPredicate {
    #[default]
    None,
    Origin(Arc<OriginFn>),
    Request(Arc<OriginRequestFn>),
    /// Like [`OriginPredicate::Request`], also naming request fields the decision read.
    /// Those names are added to `Vary` whether or not the origin is allowed.
    VaryRequest(Arc<OriginVaryRequestFn>),
}

impl OriginPredicate {
    pub fn origin<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Origin(Arc::new(predicate))
    }

    pub fn request<F>(predicate: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>, &str) -> bool + Send + Sync + 'static,
    {
        Self::Request(Arc::new(predicate))
    }

    pub fn vary_request<F>(predicate: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>, &str) -> (bool, Vec<String>) + Send + Sync + 'static,
    {
        Self::VaryRequest(Arc::new(predicate))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    fn evaluate(&self, request: &RequestContext<'_>, origin: &str) -> OriginMatch {
        match self {
            Self::None => OriginMatch::denied(),
            Self::Origin(predicate) => OriginMatch::from_allowed(predicate(origin)),
            Self::Request(predicate) => OriginMatch::from_allowed(predicate(request, origin)),
            Self::VaryRequest(predicate) => {
                let (allowed, vary) = predicate(request, origin);
                OriginMatch {
                    allowed,
                    any: false,
                    vary,
                }
            }
        }
    }
}

impl fmt::Debug for OriginPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Origin(_) => "Origin(..)",
            Self::Request(_) => "Request(..)",
            Self::VaryRequest(_) => "VaryRequest(..)",
        };
        f.write_str(name)
    }
}

/// Outcome of matching one request origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginMatch {
    pub allowed: bool,
    /// Allowed by the match-all configuration rather than a specific entry.
    pub any: bool,
    /// Extra field names the response must vary on.
    pub vary: Vec<String>,
}

impl OriginMatch {
    fn denied() -> Self {
        Self::default()
    }

    fn from_allowed(allowed: bool) -> Self {
        Self {
            allowed,
            ..Self::default()
        }
    }
}

/// Origins allowed by configuration: a match-all flag, exact lowercase origins, and
/// single-`*` wildcard patterns kept in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedOrigins {
    all: bool,
    exact: IndexSet<String>,
    patterns: Vec<Wildcard>,
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self {
            all: true,
            ..Self::default()
        }
    }

    /// Compiles configured origins. A bare `*` entry turns the whole list into match-all.
    pub fn parse<I, S>(values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut origins = Self::default();
        for value in values {
            let origin = normalize_lower(value.as_ref().trim());
            if origin.is_empty() {
                return Err(ValidationError::EmptyOrigin);
            }
            if origin == "*" {
                return Ok(Self::any());
            }

            match origin.matches('*').count() {
                0 => {
                    origins.exact.insert(origin);
                }
                1 => {
                    if let Some(wildcard) = Wildcard::parse(&origin) {
                        origins.patterns.push(wildcard);
                    }
                }
                _ => {
                    return Err(ValidationError::InvalidOriginPattern {
                        pattern: value.as_ref().to_owned(),
                    });
                }
            }
        }

        Ok(origins)
    }

    pub fn is_any(&self) -> bool {
        self.all
    }

    pub fn is_empty(&self) -> bool {
        !self.all && self.exact.is_empty() && self.patterns.is_empty()
    }

    /// Tests an already-lowercased origin against exact entries, then patterns in order.
    fn contains(&self, lowered: &str) -> bool {
        self.exact.contains(lowered) || self.patterns.iter().any(|w| w.matches(lowered))
    }
}

/// Decides whether a request origin may access the resource.
#[derive(Debug, Clone, Default)]
pub struct OriginMatcher {
    origins: AllowedOrigins,
    predicate: OriginPredicate,
}

impl OriginMatcher {
    pub fn new(origins: AllowedOrigins, predicate: OriginPredicate) -> Self {
        Self { origins, predicate }
    }

    /// True when every origin is allowed unconditionally, with no predicate to consult.
    pub fn is_any(&self) -> bool {
        self.origins.is_any() && self.predicate.is_none()
    }

    /// First match wins: match-all, exact origins, wildcard patterns, then the predicate.
    ///
    /// Comparison against configured origins is case-insensitive. Origins longer than
    /// 4096 bytes skip that comparison and go straight to the predicate.
    pub fn matches(&self, request: &RequestContext<'_>, origin: &str) -> OriginMatch {
        if self.is_any() {
            return OriginMatch {
                allowed: true,
                any: true,
                vary: Vec::new(),
            };
        }

        if origin.len() <= MAX_ORIGIN_LENGTH && self.origins.contains(&normalize_lower(origin)) {
            return OriginMatch::from_allowed(true);
        }

        self.predicate.evaluate(request, origin)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
