//! CORS policy filter for the email-writer backend.
//!
//! Rules are built and validated once at start-up ([`Cors::new`],
//! [`CorsRegistry::from_config`]) and then evaluated per request without
//! shared mutable state.

mod allowed_headers;
mod allowed_methods;
pub mod config;
pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
#[cfg(feature = "axum")]
pub mod middleware;
mod options;
mod origin;
mod path_pattern;
mod registry;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsConfig};
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{Origin, OriginDecision};
pub use path_pattern::PathPattern;
pub use registry::CorsRegistry;
pub use result::{CorsDecision, PreflightResult, SimpleResult};
