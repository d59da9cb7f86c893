//! HTTP connection ownership

use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::Client;
use tracing::debug;

use crate::error::LastfmResult;

/// Connection pool a client issues its requests through
///
/// An owned connection is built on first use and torn down when the client is
/// closed or dropped. A shared connection belongs to the caller and is never
/// torn down here; the client only holds a handle to it.
pub(crate) enum Connection {
    Owned {
        client: OnceCell<Client>,
        user_agent: String,
    },
    Shared(Client),
}

impl Connection {
    pub(crate) fn owned(user_agent: impl Into<String>) -> Self {
        Connection::Owned {
            client: OnceCell::new(),
            user_agent: user_agent.into(),
        }
    }

    pub(crate) fn shared(client: Client) -> Self {
        Connection::Shared(client)
    }

    /// HTTP client for the next request, building an owned one if needed
    pub(crate) fn acquire(&self) -> LastfmResult<&Client> {
        match self {
            Connection::Owned { client, user_agent } => client
                .get_or_try_init(|| {
                    debug!("Opening Last.fm connection");
                    // No request timeout: the transport default applies
                    Client::builder()
                        .pool_max_idle_per_host(5)
                        .pool_idle_timeout(Duration::from_secs(90))
                        .user_agent(user_agent.as_str())
                        .build()
                })
                .map_err(Into::into),
            Connection::Shared(client) => Ok(client),
        }
    }

    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Connection::Owned { .. })
    }

    pub(crate) fn is_open(&self) -> bool {
        match self {
            Connection::Owned { client, .. } => client.get().is_some(),
            Connection::Shared(_) => true,
        }
    }

    /// Release the connection if it is ours
    pub(crate) fn close(self) {
        match self {
            Connection::Owned { client, .. } => {
                if let Some(client) = client.into_inner() {
                    debug!("Closing Last.fm connection");
                    drop(client);
                }
            }
            Connection::Shared(_) => {
                debug!("Leaving caller-supplied Last.fm connection open");
            }
        }
    }
}
