use crate::options::ValidationError;
use crate::util::{is_http_token, split_header_list};
use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Wildcard: every requested header is accepted.
    #[default]
    Any,
}

impl AllowedHeaders {
    /// Builds an allow-list, trimming and de-duplicating case-insensitively.
    /// A list holding only `*` collapses to [`AllowedHeaders::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if seen.insert(trimmed.to_ascii_lowercase()) {
                deduped.push(trimmed);
            }
        }

        if deduped.len() == 1 && deduped[0] == "*" {
            return Self::Any;
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn allows_headers(&self, request_headers: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => split_header_list(request_headers).all(|header| {
                allowed
                    .iter()
                    .any(|allowed_header| allowed_header.eq_ignore_ascii_case(header))
            }),
        }
    }

    /// Value for a preflight response. The wildcard echoes the requested
    /// headers back, falling back to `*` when none were requested.
    pub fn header_value(&self, request_headers: Option<&str>) -> Option<String> {
        match self {
            Self::Any => {
                let requested: Vec<&str> =
                    request_headers.map(split_header_list).into_iter().flatten().collect();
                if requested.is_empty() {
                    Some("*".to_string())
                } else {
                    Some(requested.join(", "))
                }
            }
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(", ")),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        let Self::List(values) = self else {
            return Ok(());
        };

        if values.iter().any(|value| value == "*") {
            return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
        }

        match values.iter().find(|value| !is_http_token(value)) {
            Some(invalid) => Err(ValidationError::InvalidHeaderName(invalid.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
