//! Shared test utilities for the lastfm-history workspace
//!
//! This crate provides a mock Last.fm web service and JSON fixtures in the
//! shapes each `user.*` method returns, for testing without network access.
//!
//! # Mock Services
//!
//! - [`MockLastfmServer`] - Mock Last.fm server for client and probe tests
//!
//! # Example
//!
//! ```rust,ignore
//! use lastfm_history_test_utils::{ArtistFixture, MockLastfmServer};
//!
//! #[tokio::test]
//! async fn test_with_mocks() {
//!     let lastfm = MockLastfmServer::start().await;
//!     lastfm
//!         .mock_top_artists("rj", &[ArtistFixture::new("Radiohead", 42)], 1)
//!         .await;
//!
//!     // Use lastfm.api_url() and lastfm.api_key() to configure your client
//! }
//! ```

mod fixtures;
mod lastfm;

pub use fixtures::{
    chart_attr, listing_json, page_attr, AlbumFixture, ArtistFixture, ImageFixture, TagFixture,
    TrackFixture, UserFixture,
};
pub use lastfm::{MockLastfmServer, API_PATH};
