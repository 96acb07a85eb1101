use crate::constants::method;
use crate::options::ValidationError;
use crate::util::is_http_token;
use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods {
    values: Vec<String>,
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods. Order is kept; later
    /// case-insensitive duplicates are dropped.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if seen.insert(trimmed.to_ascii_uppercase()) {
                deduped.push(trimmed);
            }
        }

        Self { values: deduped }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    pub fn into_inner(self) -> Vec<String> {
        self.values
    }

    pub fn allows_method(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        self.values
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(candidate))
    }

    /// Header value representation, `None` when the list is empty.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(", "))
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.values.is_empty() {
            return Err(ValidationError::EmptyMethodList);
        }

        match self.values.iter().find(|value| !is_http_token(value)) {
            Some(invalid) => Err(ValidationError::InvalidMethod(invalid.clone())),
            None => Ok(()),
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::POST,
            method::PUT,
            method::DELETE,
            method::OPTIONS,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
