use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_MAX_AGE_SECS, origin as known};
use crate::options::{CorsOptions, ValidationError};
use crate::origin::Origin;
use crate::path_pattern::PathPattern;
use crate::util::split_header_list;
use serde::Deserialize;
use std::env;
use thiserror::Error;

pub const ENV_PATH_PATTERN: &str = "CORS_PATH_PATTERN";
pub const ENV_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const ENV_ALLOWED_METHODS: &str = "CORS_ALLOWED_METHODS";
pub const ENV_ALLOWED_HEADERS: &str = "CORS_ALLOWED_HEADERS";
pub const ENV_ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
pub const ENV_MAX_AGE: &str = "CORS_MAX_AGE";

/// Plain-data form of a CORS rule, as written in config files or the environment.
///
/// The default is the email-writer policy: the local Vite dev server and the
/// two deployed front-ends, standard methods, any header, no credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub path_pattern: String,
    /// Exact origins, or `["*"]` for any origin.
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    /// Header names, or `["*"]` for any header.
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            path_pattern: PathPattern::MATCH_ALL.to_string(),
            allowed_origins: vec![
                known::LOCAL_DEV.to_string(),
                known::RENDER_DEPLOYMENT.to_string(),
                known::VERCEL_DEPLOYMENT.to_string(),
            ],
            allowed_methods: AllowedMethods::default().into_inner(),
            allowed_headers: vec!["*".to_string()],
            allow_credentials: false,
            max_age: Some(DEFAULT_MAX_AGE_SECS),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse CORS configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("environment variable {key} has invalid value '{value}'")]
    InvalidEnv { key: &'static str, value: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CorsConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Defaults overridden by `CORS_*` variables from the process environment
    /// (a `.env` file is loaded first when present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_PATH_PATTERN) {
            config.path_pattern = value.trim().to_string();
        }
        if let Some(value) = lookup(ENV_ALLOWED_ORIGINS) {
            config.allowed_origins = split_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOWED_METHODS) {
            config.allowed_methods = split_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOWED_HEADERS) {
            config.allowed_headers = split_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOW_CREDENTIALS) {
            config.allow_credentials = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                key: ENV_ALLOW_CREDENTIALS,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_MAX_AGE) {
            let seconds = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                key: ENV_MAX_AGE,
                value: value.clone(),
            })?;
            config.max_age = Some(seconds);
        }

        Ok(config)
    }

    pub fn into_options(self) -> Result<CorsOptions, ValidationError> {
        let any_origin = matches!(self.allowed_origins.as_slice(), [only] if only.trim() == "*");
        let origin = if any_origin {
            Origin::any()
        } else {
            Origin::list(self.allowed_origins)
        };

        let options = CorsOptions {
            path_pattern: PathPattern::parse(&self.path_pattern)?,
            origin,
            methods: AllowedMethods::list(self.allowed_methods),
            allowed_headers: AllowedHeaders::list(self.allowed_headers),
            credentials: self.allow_credentials,
            max_age: self.max_age,
            ..CorsOptions::default()
        };
        options.validate()?;
        Ok(options)
    }
}

fn split_list(value: &str) -> Vec<String> {
    split_header_list(value).map(str::to_string).collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
