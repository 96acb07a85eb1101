use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_MAX_AGE_SECS, origin as known};
use crate::origin::Origin;
use crate::path_pattern::PathPattern;
use thiserror::Error;

/// A single CORS rule: which paths it covers and what it allows there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    pub path_pattern: PathPattern,
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub credentials: bool,
    pub max_age: Option<u64>,
    pub options_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            path_pattern: PathPattern::match_all(),
            origin: Origin::list([
                known::LOCAL_DEV,
                known::RENDER_DEPLOYMENT,
                known::VERCEL_DEPLOYMENT,
            ]),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::Any,
            credentials: false,
            max_age: Some(DEFAULT_MAX_AGE_SECS),
            options_success_status: 204,
        }
    }
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials && self.origin.is_any() {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }
        if !(200..300).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidPreflightStatus(
                self.options_success_status,
            ));
        }

        self.origin.validate()?;
        self.methods.validate()?;
        self.allowed_headers.validate()?;
        Ok(())
    }
}

/// Configuration problems detected when a rule is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "credentials cannot be allowed together with a wildcard origin; list the origins explicitly"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("invalid origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },
    #[error("invalid path pattern '{pattern}': {reason}")]
    InvalidPathPattern { pattern: String, reason: String },
    #[error("at least one method must be allowed")]
    EmptyMethodList,
    #[error("'{0}' is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("'{0}' is not a valid header name")]
    InvalidHeaderName(String),
    #[error("allowed headers list cannot mix '*' with explicit names")]
    AllowedHeadersListCannotContainWildcard,
    #[error("preflight status {0} is not a 2xx status")]
    InvalidPreflightStatus(u16),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
