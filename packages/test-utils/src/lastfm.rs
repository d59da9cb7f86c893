//! Mock Last.fm web service for testing the client end to end
//!
//! Provides a [`MockLastfmServer`] that answers `user.*` method calls on the
//! `/2.0/` endpoint, matching on the `method`, `api_key` and `format` query
//! parameters.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, Request, ResponseTemplate};

use crate::fixtures::{
    chart_attr, listing_json, page_attr, AlbumFixture, ArtistFixture, TagFixture, TrackFixture,
    UserFixture,
};

/// Path the Last.fm API is served from
pub const API_PATH: &str = "/2.0/";

/// Mock Last.fm server
///
/// This struct wraps a [`wiremock::MockServer`] and provides convenience methods
/// for the responses of each `user.*` method and for service error bodies.
///
/// # Example
///
/// ```rust,ignore
/// use lastfm_history_test_utils::{MockLastfmServer, UserFixture};
///
/// #[tokio::test]
/// async fn test_user_info() {
///     let server = MockLastfmServer::start().await;
///     server.mock_user_info(&UserFixture::new("rj")).await;
///
///     // Configure your client with server.api_url() and server.api_key()
/// }
/// ```
pub struct MockLastfmServer {
    server: MockServer,
    api_key: String,
}

impl MockLastfmServer {
    /// Start a new mock Last.fm server with default API key
    pub async fn start() -> Self {
        Self::start_with_api_key("test-api-key").await
    }

    /// Start a new mock Last.fm server with custom API key
    pub async fn start_with_api_key(api_key: &str) -> Self {
        Self {
            server: MockServer::start().await,
            api_key: api_key.to_string(),
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get the full API endpoint URL
    pub fn api_url(&self) -> String {
        format!("{}{}", self.server.uri(), API_PATH)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Requests received so far
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    fn given(&self, lastfm_method: &str) -> MockBuilder {
        Mock::given(method("GET"))
            .and(path(API_PATH))
            .and(query_param("method", lastfm_method))
            .and(query_param("api_key", self.api_key.as_str()))
            .and(query_param("format", "json"))
    }

    /// Mount a successful response body for a method
    pub async fn mock_method(&self, lastfm_method: &str, body: Value) {
        self.given(lastfm_method)
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a successful response body that is only served after `delay`
    pub async fn mock_method_delayed(&self, lastfm_method: &str, body: Value, delay: Duration) {
        self.given(lastfm_method)
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a successful response for a method that must be called exactly `times` times
    ///
    /// Verified when the server is dropped.
    pub async fn mock_method_expect(&self, lastfm_method: &str, body: Value, times: u64) {
        self.given(lastfm_method)
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Mount a service error body, formatted as `"<code> - <message>"`
    pub async fn mock_error(&self, lastfm_method: &str, status: u16, code: i64, message: &str) {
        self.given(lastfm_method)
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": code,
                "message": format!("{} - {}", code, message),
                "links": []
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a raw (possibly non-JSON) body for a method
    pub async fn mock_raw(&self, lastfm_method: &str, status: u16, body: &str) {
        self.given(lastfm_method)
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mount an invalid-API-key error for requests using `bad_api_key`
    ///
    /// Only matches the given key, so mocks mounted for the valid key keep working.
    pub async fn mock_invalid_api_key(&self, bad_api_key: &str) {
        Mock::given(method("GET"))
            .and(path(API_PATH))
            .and(query_param("api_key", bad_api_key))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": 10,
                "message": "10 - Invalid API key"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a `user.getinfo` response
    pub async fn mock_user_info(&self, user: &UserFixture) {
        self.mock_method("user.getinfo", user.to_json()).await;
    }

    /// Mount a `user.getrecenttracks` response
    pub async fn mock_recent_tracks(&self, user: &str, tracks: &[TrackFixture], total: u64) {
        let items = tracks.iter().map(TrackFixture::recent_json).collect();
        let attr = page_attr(user, 1, tracks.len() as u32, total);
        self.mock_method(
            "user.getrecenttracks",
            listing_json("recenttracks", "track", items, attr),
        )
        .await;
    }

    /// Mount an extended `user.getrecenttracks` response
    pub async fn mock_recent_tracks_extended(&self, user: &str, tracks: &[TrackFixture], total: u64) {
        let items = tracks
            .iter()
            .map(TrackFixture::recent_extended_json)
            .collect();
        let attr = page_attr(user, 1, tracks.len() as u32, total);
        self.given("user.getrecenttracks")
            .and(query_param("extended", "1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(listing_json("recenttracks", "track", items, attr)),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a `user.gettopartists` response, ranked in the given order
    pub async fn mock_top_artists(&self, user: &str, artists: &[ArtistFixture], total: u64) {
        let items = ranked(artists, ArtistFixture::top_json);
        let attr = page_attr(user, 1, artists.len() as u32, total);
        self.mock_method(
            "user.gettopartists",
            listing_json("topartists", "artist", items, attr),
        )
        .await;
    }

    /// Mount a `user.gettopalbums` response, ranked in the given order
    pub async fn mock_top_albums(&self, user: &str, albums: &[AlbumFixture], total: u64) {
        let items = ranked(albums, AlbumFixture::top_json);
        let attr = page_attr(user, 1, albums.len() as u32, total);
        self.mock_method(
            "user.gettopalbums",
            listing_json("topalbums", "album", items, attr),
        )
        .await;
    }

    /// Mount a `user.gettoptracks` response, ranked in the given order
    pub async fn mock_top_tracks(&self, user: &str, tracks: &[TrackFixture], total: u64) {
        let items = ranked(tracks, TrackFixture::top_json);
        let attr = page_attr(user, 1, tracks.len() as u32, total);
        self.mock_method(
            "user.gettoptracks",
            listing_json("toptracks", "track", items, attr),
        )
        .await;
    }

    /// Mount a `user.gettoptags` response
    pub async fn mock_top_tags(&self, user: &str, tags: &[TagFixture]) {
        let items = tags.iter().map(TagFixture::to_json).collect();
        self.mock_method(
            "user.gettoptags",
            listing_json("toptags", "tag", items, json!({"user": user})),
        )
        .await;
    }

    /// Mount a `user.getweeklyartistchart` response
    pub async fn mock_weekly_artist_chart(&self, user: &str, artists: &[ArtistFixture]) {
        let items = ranked(artists, ArtistFixture::chart_json);
        self.mock_method(
            "user.getweeklyartistchart",
            listing_json("weeklyartistchart", "artist", items, chart_attr(user)),
        )
        .await;
    }

    /// Mount a `user.getweeklyalbumchart` response
    pub async fn mock_weekly_album_chart(&self, user: &str, albums: &[AlbumFixture]) {
        let items = ranked(albums, AlbumFixture::chart_json);
        self.mock_method(
            "user.getweeklyalbumchart",
            listing_json("weeklyalbumchart", "album", items, chart_attr(user)),
        )
        .await;
    }

    /// Mount a `user.getweeklytrackchart` response
    pub async fn mock_weekly_track_chart(&self, user: &str, tracks: &[TrackFixture]) {
        let items = ranked(tracks, TrackFixture::chart_json);
        self.mock_method(
            "user.getweeklytrackchart",
            listing_json("weeklytrackchart", "track", items, chart_attr(user)),
        )
        .await;
    }
}

fn ranked<T>(entries: &[T], render: impl Fn(&T, u32) -> Value) -> Vec<Value> {
    entries
        .iter()
        .zip(1u32..)
        .map(|(entry, rank)| render(entry, rank))
        .collect()
}
