//! Last.fm web service configuration

use std::fmt;

use crate::{get_env_or_default, get_required_env, ConfigError, ConfigResult};

/// Public Last.fm API endpoint
pub const DEFAULT_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Last.fm web service configuration
#[derive(Clone, PartialEq, Eq)]
pub struct LastfmConfig {
    /// API key sent with every request
    pub api_key: String,

    /// Endpoint all methods are issued against
    pub api_url: String,

    /// User agent for connections the client creates itself
    pub user_agent: String,
}

impl LastfmConfig {
    /// Load Last.fm configuration from environment variables
    ///
    /// - `LASTFM_API_KEY` (required, must not be blank)
    /// - `LASTFM_API_URL` (default: [`DEFAULT_API_URL`], must be http or https)
    /// - `LASTFM_USER_AGENT` (default: `lastfm-history/<version>`)
    pub fn from_env() -> ConfigResult<Self> {
        let api_key = get_required_env("LASTFM_API_KEY")?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::Blank("LASTFM_API_KEY".to_string()));
        }

        let api_url = get_env_or_default("LASTFM_API_URL", DEFAULT_API_URL);
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl("LASTFM_API_URL".to_string(), api_url));
        }

        Ok(Self {
            api_key,
            api_url,
            user_agent: get_env_or_default("LASTFM_USER_AGENT", &default_user_agent()),
        })
    }

    /// Create a configuration for the public endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_url(DEFAULT_API_URL, api_key)
    }

    /// Create a configuration with a custom endpoint (useful for testing)
    pub fn with_url(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Debug for LastfmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LastfmConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_user_agent() -> String {
    format!("lastfm-history/{}", env!("CARGO_PKG_VERSION"))
}
