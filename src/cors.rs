use crate::constants::method;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::result::{CorsDecision, PreflightResult, SimpleResult};
use tracing::{debug, info, trace};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Evaluation never fails: a rejected origin only loses its
/// `Access-Control-Allow-Origin` header and the browser does the blocking.
#[derive(Debug, Clone)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        info!(
            path_pattern = %options.path_pattern,
            any_origin = options.origin.is_any(),
            credentials = options.credentials,
            "CORS rule registered"
        );
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn applies_to(&self, path: &str) -> bool {
        self.options.path_pattern.matches(path)
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        if request.origin().is_none() || !self.applies_to(request.path) {
            trace!(path = request.path, "request is not cross-origin for this rule");
            return CorsDecision::NotApplicable;
        }

        if request.method == method::OPTIONS {
            CorsDecision::Preflight(self.process_preflight(request))
        } else {
            CorsDecision::Simple(self.process_simple(request))
        }
    }

    fn process_preflight(&self, request: &RequestContext<'_>) -> PreflightResult {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();

        let (origin_headers, origin_allowed) = builder.build_origin_headers(request);
        headers.extend(origin_headers);
        if origin_allowed {
            headers.extend(builder.build_credentials_header());
        } else {
            debug!(
                origin = request.origin(),
                path = request.path,
                "preflight from origin outside the allow-list"
            );
        }

        if let Some(requested) = request.access_control_request_method
            && !self.options.methods.allows_method(requested)
        {
            debug!(
                requested_method = requested,
                path = request.path,
                "preflight asked for a method the rule does not list"
            );
        }
        if let Some(requested) = request.access_control_request_headers
            && !self.options.allowed_headers.allows_headers(requested)
        {
            debug!(
                requested_headers = requested,
                path = request.path,
                "preflight asked for headers the rule does not list"
            );
        }

        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers(request));
        headers.extend(builder.build_max_age_header());
        headers.extend(builder.build_preflight_vary());

        trace!(path = request.path, origin_allowed, "preflight evaluated");
        PreflightResult {
            headers: headers.into_headers(),
            status: self.options.options_success_status,
        }
    }

    fn process_simple(&self, request: &RequestContext<'_>) -> SimpleResult {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();

        let (origin_headers, origin_allowed) = builder.build_origin_headers(request);
        headers.extend(origin_headers);
        if origin_allowed {
            headers.extend(builder.build_credentials_header());
        } else {
            debug!(
                origin = request.origin(),
                method = request.method,
                path = request.path,
                "cross-origin request from origin outside the allow-list"
            );
        }

        trace!(path = request.path, origin_allowed, "request evaluated");
        SimpleResult {
            headers: headers.into_headers(),
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
