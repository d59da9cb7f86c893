//! Configuration for the Last.fm listening-history client
//!
//! Settings are read from environment variables. Loading a `.env` file is
//! left to binaries (see `dotenvy`); the library only looks at the process
//! environment.

mod error;
mod lastfm;

pub use error::{ConfigError, ConfigResult};
pub use lastfm::{LastfmConfig, DEFAULT_API_URL};

use std::env;

/// Helper function to get a required environment variable
pub fn get_required_env(name: &str) -> ConfigResult<String> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
