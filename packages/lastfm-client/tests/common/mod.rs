//! Common test utilities for Last.fm client integration tests

#![allow(unused_imports)]
#![allow(dead_code)]

use std::collections::HashMap;

use lastfm_history_client::{LastfmClient, LastfmConfig};
use wiremock::Request;

pub use lastfm_history_test_utils::*;

/// Client pointed at the mock server, authenticated with its API key
pub fn client_for(server: &MockLastfmServer) -> LastfmClient {
    LastfmClient::new(&config_for(server)).expect("client should build")
}

pub fn config_for(server: &MockLastfmServer) -> LastfmConfig {
    LastfmConfig::with_url(server.api_url(), server.api_key())
}

/// Query parameters of a recorded request
pub fn query_of(request: &Request) -> HashMap<String, String> {
    request.url.query_pairs().into_owned().collect()
}

/// Query parameters of the only request the server received
pub async fn single_query(server: &MockLastfmServer) -> HashMap<String, String> {
    let requests = server.received_requests().await;
    assert_eq!(requests.len(), 1, "expected exactly one request");
    query_of(&requests[0])
}
