use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Origin headers plus whether the origin was accepted. `Vary: Origin`
    /// is emitted either way when the answer depends on the origin.
    pub(crate) fn build_origin_headers(
        &self,
        request: &RequestContext<'_>,
    ) -> (HeaderCollection, bool) {
        let origin = request.origin();
        match self.options.origin.resolve(origin) {
            OriginDecision::Any => {
                let mut headers = HeaderCollection::with_capacity(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
                (headers, true)
            }
            OriginDecision::Mirror => {
                let mut headers = HeaderCollection::with_capacity(2);
                if let Some(origin) = origin {
                    headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                }
                headers.add_vary(header::ORIGIN);
                (headers, true)
            }
            OriginDecision::Disallow => {
                let mut headers = HeaderCollection::with_capacity(1);
                headers.add_vary(header::ORIGIN);
                (headers, false)
            }
            OriginDecision::Skip => (HeaderCollection::new(), false),
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_capacity(1);
        if let Some(value) = self.options.methods.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_capacity(1);
        if let Some(value) = self
            .options
            .allowed_headers
            .header_value(request.access_control_request_headers)
        {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_capacity(1);
        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_capacity(1);
        if let Some(seconds) = self.options.max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
        }
        headers
    }

    pub(crate) fn build_preflight_vary(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_capacity(1);
        headers.add_vary(header::ORIGIN);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
