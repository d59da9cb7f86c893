//! Last.fm API client implementation

use std::fmt;

use lastfm_history_config::LastfmConfig;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::connection::Connection;
use crate::error::{LastfmError, LastfmResult, ServiceError};
use crate::request::build_query;
use crate::user::UserApi;

/// Last.fm API client
///
/// Operations take `&self`, so one client can serve many concurrent calls.
pub struct LastfmClient {
    connection: Connection,
    api_key: String,
    api_url: String,
}

/// Error body returned by the service
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: i64,
    #[serde(default)]
    message: String,
}

impl fmt::Debug for LastfmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LastfmClient")
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("owns_connection", &self.owns_connection())
            .finish()
    }
}

impl LastfmClient {
    /// Create a client that opens its own connection on first use
    ///
    /// # Errors
    /// Returns `LastfmError::MissingApiKey` if the API key is blank
    pub fn new(config: &LastfmConfig) -> LastfmResult<Self> {
        Self::build(config, Connection::owned(config.user_agent.as_str()))
    }

    /// Create a client from `LASTFM_*` environment variables
    ///
    /// # Errors
    /// Returns `LastfmError::Config` if the configuration cannot be loaded
    pub fn from_env() -> LastfmResult<Self> {
        Self::new(&LastfmConfig::from_env()?)
    }

    /// Create a client on a caller-supplied connection
    ///
    /// The client never tears the supplied connection down.
    pub fn with_client(config: &LastfmConfig, http_client: Client) -> LastfmResult<Self> {
        Self::build(config, Connection::shared(http_client))
    }

    fn build(config: &LastfmConfig, connection: Connection) -> LastfmResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(LastfmError::MissingApiKey);
        }

        Ok(Self {
            connection,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
        })
    }

    /// Whether the connection was created by (and is released by) this client
    pub fn owns_connection(&self) -> bool {
        self.connection.is_owned()
    }

    /// Whether a connection is currently open
    pub fn is_connected(&self) -> bool {
        self.connection.is_open()
    }

    /// Release the connection if this client created it
    ///
    /// Dropping the client has the same effect.
    pub fn close(self) {
        self.connection.close();
    }

    /// User listening-history methods
    pub fn user(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    /// Issue one method call and return the body of a successful response
    pub(crate) async fn call(
        &self,
        method: &str,
        params: &[(&'static str, String)],
    ) -> LastfmResult<Value> {
        let http_client = self.connection.acquire()?;
        let query = build_query(method, &self.api_key, params);

        debug!(method, "Sending Last.fm request");

        let response = http_client.get(&self.api_url).query(&query).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        if status == StatusCode::OK && !is_error_body(&body) {
            return Ok(body);
        }

        let ErrorResponse { error, message } = serde_json::from_value(body)?;
        let error = ServiceError::classify(error, &message);
        warn!(
            method,
            status = status.as_u16(),
            code = error.code,
            kind = %error.kind,
            "Last.fm API returned an error"
        );
        Err(error.into())
    }
}

/// Successful responses occasionally carry an error body instead of data
fn is_error_body(body: &Value) -> bool {
    body.get("error").map_or(false, Value::is_i64)
}
