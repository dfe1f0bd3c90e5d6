//! CORS policy decision engine.
//!
//! Build a [`Cors`] once from [`CorsOptions`], then call [`Cors::check`] for every request.
//! The engine never touches the transport: it reads a [`RequestContext`] and returns a
//! [`CorsDecision`] whose headers the caller writes into its response through [`HeaderSink`].

pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod context;
mod cors;
mod header_builder;
mod header_set;
mod headers;
mod options;
mod origin;
mod policy;
mod result;
mod util;
mod wildcard;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use header_set::{HeaderAllowSet, MAX_EMPTY_ELEMENTS, canonicalize_header_name};
pub use headers::{HeaderSink, Headers};
pub use options::{CorsOptions, ValidationError};
pub use origin::{
    AllowedOrigins, OriginFn, OriginMatch, OriginMatcher, OriginPredicate, OriginRequestFn,
    OriginVaryRequestFn,
};
pub use result::{CorsDecision, CorsResult};
pub use wildcard::Wildcard;
