use crate::options::ValidationError;
use crate::util::equals_ignore_case;
use std::collections::HashSet;
use url::Url;

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Which request origins a rule accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Any origin; answered with `Access-Control-Allow-Origin: *`.
    Any,
    /// Exact, case-insensitive allow-list of serialized origins.
    List(Vec<String>),
}

/// Outcome of matching a request origin against an [`Origin`] rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    Any,
    Mirror,
    Disallow,
    Skip,
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    /// Builds an allow-list, trimming whitespace and a single trailing `/`,
    /// and dropping case-insensitive duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped = Vec::new();
        for value in values {
            let value = value.into();
            let trimmed = value.trim();
            let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed).to_string();
            if seen.insert(trimmed.to_ascii_lowercase()) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        let Some(origin) = request_origin else {
            return OriginDecision::Skip;
        };
        if origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        match self {
            Origin::Any => OriginDecision::Any,
            Origin::List(allowed) => {
                if allowed
                    .iter()
                    .any(|candidate| equals_ignore_case(candidate, origin))
                {
                    OriginDecision::Mirror
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Origin::Any)
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Origin::Any => Ok(()),
            Origin::List(values) => values.iter().try_for_each(|value| validate_origin(value)),
        }
    }
}

fn validate_origin(value: &str) -> Result<(), ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidOrigin {
        origin: value.to_string(),
        reason,
    };

    if value == "*" {
        return Err(invalid("wildcard cannot appear inside an origin list".into()));
    }

    let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("origin must not contain a path or query".into()));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(invalid("origin must not contain user info".into()));
    }

    let serialized = url.origin().ascii_serialization();
    if !serialized.eq_ignore_ascii_case(value) {
        return Err(invalid(format!("not in serialized form, expected '{serialized}'")));
    }

    Ok(())
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
