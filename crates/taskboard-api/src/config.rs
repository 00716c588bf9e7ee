//! Environment-provided API configuration
//!
//! The client needs exactly one value to run: the backend base URL.
//! Its absence is a fatal startup condition; nothing may proceed
//! against an undefined endpoint.

use url::Url;

/// Name of the required environment variable
pub const BASE_URL_VAR: &str = "TASKBOARD_API_BASE_URL";

/// Startup configuration failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The variable is not set at all
    #[error("missing required environment variable {BASE_URL_VAR}")]
    Missing,

    /// The variable is set but blank
    #[error("{BASE_URL_VAR} must not be empty")]
    Empty,

    /// The value does not parse as a usable absolute URL
    #[error("{BASE_URL_VAR} is not a valid base URL ({value:?}): {reason}")]
    Invalid {
        /// The rejected value
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Validated client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Read and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(BASE_URL_VAR).ok())
    }

    /// Build configuration from an explicit base URL string.
    pub fn from_base_url(value: &str) -> Result<Self, ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::Empty);
        }
        let base_url = Url::parse(value).map_err(|e| ConfigError::Invalid {
            value: value.to_owned(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid {
                value: value.to_owned(),
                reason: "URL cannot serve as a base".to_owned(),
            });
        }
        Ok(Self { base_url })
    }

    fn from_env_value(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            None => Err(ConfigError::Missing),
            Some(v) => Self::from_base_url(&v),
        }
    }

    /// The configured base URL
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
