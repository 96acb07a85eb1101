use crate::headers::Headers;

/// Response to send in place of the handler for a preflight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// Headers to add to the handler's response for an actual request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
    NotApplicable,
}

impl CorsDecision {
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::Preflight(result) => Some(&result.headers),
            CorsDecision::Simple(result) => Some(&result.headers),
            CorsDecision::NotApplicable => None,
        }
    }
}
