//! axum adapter: mount with
//! `axum::middleware::from_fn_with_state(shared, cors_middleware)`.

use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::Headers;
use crate::registry::CorsRegistry;
use crate::result::CorsDecision;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

pub type SharedCors = Arc<CorsRegistry>;

pub async fn cors_middleware(
    State(cors): State<SharedCors>,
    request: Request,
    next: Next,
) -> Response {
    let decision = {
        let owned = OwnedRequestContext::from_request(&request);
        cors.check(&owned.as_request_context())
    };

    match decision {
        CorsDecision::Preflight(result) => preflight_response(result.status, &result.headers),
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

/// Request fields copied out of the header map. Values that are not valid
/// UTF-8 are kept (lossily decoded) so they still count as present.
struct OwnedRequestContext {
    method: String,
    path: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            path: request.uri().path().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn preflight_response(status: u16, headers: &Headers) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::NO_CONTENT);
    apply_headers(response.headers_mut(), headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            (Ok(header_name), Ok(header_value)) => {
                if header_name.as_str().eq_ignore_ascii_case(header::VARY) {
                    map.append(header_name, header_value);
                } else {
                    map.insert(header_name, header_value);
                }
            }
            _ => warn!(header = %name, "dropping CORS header that is not valid HTTP"),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
