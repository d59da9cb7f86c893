//! Errors raised while loading Last.fm settings

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A variable is set but blank
    #[error("{0} is set but empty")]
    Blank(String),

    /// The endpoint is not an http(s) URL
    #[error("{0} must be an http:// or https:// URL, got {1:?}")]
    InvalidUrl(String, String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
