use crate::config::CorsConfig;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::options::{CorsOptions, ValidationError};
use crate::result::CorsDecision;
use tracing::trace;

/// Ordered set of CORS rules. The first rule whose path pattern matches the
/// request path decides; later rules are not consulted.
#[derive(Debug, Clone, Default)]
pub struct CorsRegistry {
    rules: Vec<Cors>,
}

impl CorsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the single rule described by `config`.
    pub fn from_config(config: CorsConfig) -> Result<Self, ValidationError> {
        let mut registry = Self::new();
        registry.add(config.into_options()?)?;
        Ok(registry)
    }

    pub fn add(&mut self, options: CorsOptions) -> Result<&mut Self, ValidationError> {
        self.rules.push(Cors::new(options)?);
        Ok(self)
    }

    pub fn rules(&self) -> &[Cors] {
        &self.rules
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        match self.rules.iter().find(|rule| rule.applies_to(request.path)) {
            Some(rule) => rule.check(request),
            None => {
                trace!(path = request.path, "no CORS rule covers path");
                CorsDecision::NotApplicable
            }
        }
    }
}

impl From<Cors> for CorsRegistry {
    fn from(rule: Cors) -> Self {
        Self { rules: vec![rule] }
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
