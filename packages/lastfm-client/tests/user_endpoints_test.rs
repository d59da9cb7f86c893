//! Integration tests for the `user.*` methods
//!
//! Each method is exercised against MockLastfmServer for:
//! - The query parameters sent on the wire
//! - Decoding of the method's nesting into the canonical models
//! - The "no listing" sentinel

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use lastfm_history_client::{
    ChartRange, Listing, Period, RecentTracksOptions, TagOptions, TopOptions,
};
use serde_json::json;

use common::{
    client_for, single_query, AlbumFixture, ArtistFixture, MockLastfmServer, TagFixture,
    TrackFixture, UserFixture,
};

// ============================================================================
// user.getinfo
// ============================================================================

#[test_log::test(tokio::test)]
async fn test_get_info_decodes_profile() {
    let server = MockLastfmServer::start().await;
    server.mock_user_info(&UserFixture::new("rj")).await;
    let client = client_for(&server);

    let user = client.user().get_info("rj").await.unwrap();

    assert_eq!(user.name, "rj");
    assert_eq!(user.realname.as_deref(), Some("rj Listener"));
    assert_eq!(user.country.as_deref(), Some("United Kingdom"));
    assert_eq!(user.user_type.as_deref(), Some("user"));
    assert_eq!(user.playcount, Some(150_316));
    assert_eq!(user.track_count, Some(57_066));
    assert_eq!(user.registered, Utc.timestamp_opt(1_037_793_040, 0).unwrap());

    let image = user.image.expect("profile image");
    assert_eq!(
        image.extralarge.as_deref(),
        Some("https://lastfm.freetls.fastly.net/i/u/300s/rj.png")
    );
}

#[tokio::test]
async fn test_get_info_sends_identity_and_user() {
    let server = MockLastfmServer::start().await;
    server.mock_user_info(&UserFixture::new("rj")).await;
    let client = client_for(&server);

    client.user().get_info("rj").await.unwrap();

    let query = single_query(&server).await;
    assert_eq!(query["method"], "user.getinfo");
    assert_eq!(query["api_key"], "test-api-key");
    assert_eq!(query["format"], "json");
    assert_eq!(query["user"], "rj");
    assert_eq!(query.len(), 4);
}

#[tokio::test]
async fn test_get_info_without_user_object_is_decode_error() {
    let server = MockLastfmServer::start().await;
    server.mock_method("user.getinfo", json!({})).await;
    let client = client_for(&server);

    let err = client.user().get_info("rj").await.unwrap_err();
    assert!(matches!(
        err,
        lastfm_history_client::LastfmError::Decode(_)
    ));
}

// ============================================================================
// user.getrecenttracks
// ============================================================================

#[test_log::test(tokio::test)]
async fn test_get_recent_tracks_defaults() {
    let server = MockLastfmServer::start().await;
    let tracks = vec![
        TrackFixture::new("Radiohead", "Reckoner", "In Rainbows").playing(),
        TrackFixture::new("Portishead", "Roads", "Dummy"),
    ];
    server.mock_recent_tracks("rj", &tracks, 2040).await;
    let client = client_for(&server);

    let page = client
        .user()
        .get_recent_tracks("rj", RecentTracksOptions::default())
        .await
        .unwrap()
        .expect("listing present");

    assert_eq!(page.total, 2040);
    assert_eq!(page.len(), 2);

    let first = &page.items[0];
    assert_eq!(first.artist, "Radiohead");
    assert_eq!(first.title, "Reckoner");
    assert_eq!(first.album.as_deref(), Some("In Rainbows"));
    assert!(first.now_playing);
    assert!(!page.items[1].now_playing);

    let query = single_query(&server).await;
    assert_eq!(query["method"], "user.getrecenttracks");
    assert_eq!(query["user"], "rj");
    assert_eq!(query["limit"], "5");
    assert_eq!(query["page"], "1");
    assert_eq!(query["extended"], "0");
    assert!(!query.contains_key("from"));
    assert!(!query.contains_key("to"));
}

#[tokio::test]
async fn test_get_recent_tracks_extended_with_window() {
    let server = MockLastfmServer::start().await;
    let tracks = vec![TrackFixture::new("Björk", "Hyperballad", "Post")];
    server.mock_recent_tracks_extended("rj", &tracks, 1).await;
    let client = client_for(&server);

    let options = RecentTracksOptions::default()
        .extended(true)
        .limit(50)
        .page(3)
        .since(1_700_000_000)
        .until(1_700_604_800);
    let page = client
        .user()
        .get_recent_tracks("rj", options)
        .await
        .unwrap()
        .expect("listing present");

    assert_eq!(page.items[0].artist, "Björk");
    assert_eq!(page.items[0].album.as_deref(), Some("Post"));

    let query = single_query(&server).await;
    assert_eq!(query["extended"], "1");
    assert_eq!(query["limit"], "50");
    assert_eq!(query["page"], "3");
    assert_eq!(query["from"], "1700000000");
    assert_eq!(query["to"], "1700604800");
}

#[tokio::test]
async fn test_get_recent_tracks_single_entry_object() {
    let server = MockLastfmServer::start().await;
    let track = TrackFixture::new("Low", "Lullaby", "I Could Live in Hope");
    server
        .mock_method(
            "user.getrecenttracks",
            json!({
                "recenttracks": {
                    "track": track.recent_json(),
                    "@attr": {"user": "rj", "page": "1", "perPage": "1", "total": "1"}
                }
            }),
        )
        .await;
    let client = client_for(&server);

    let page = client
        .user()
        .get_recent_tracks("rj", RecentTracksOptions::default().limit(1))
        .await
        .unwrap()
        .expect("listing present");

    assert_eq!(page.len(), 1);
    assert_eq!(page.items[0].title, "Lullaby");
}

// ============================================================================
// user.gettop*
// ============================================================================

#[test_log::test(tokio::test)]
async fn test_get_top_artists() {
    let server = MockLastfmServer::start().await;
    let artists = vec![
        ArtistFixture::new("Radiohead", 812),
        ArtistFixture::new("Boards of Canada", 640),
    ];
    server.mock_top_artists("rj", &artists, 1204).await;
    let client = client_for(&server);

    let options = TopOptions::default().period(Period::SevenDays).limit(2);
    let page = client
        .user()
        .get_top_artists("rj", options)
        .await
        .unwrap()
        .expect("listing present");

    assert_eq!(page.total, 1204);
    let names: Vec<&str> = page.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Radiohead", "Boards of Canada"]);
    assert_eq!(page.items[0].playcount, 812);
    assert_eq!(page.items[0].rank, Some(1));
    assert_eq!(page.items[1].rank, Some(2));

    let query = single_query(&server).await;
    assert_eq!(query["method"], "user.gettopartists");
    assert_eq!(query["period"], "7day");
    assert_eq!(query["limit"], "2");
    assert_eq!(query["page"], "1");
}

#[tokio::test]
async fn test_get_top_albums() {
    let server = MockLastfmServer::start().await;
    let albums = vec![AlbumFixture::new("Aphex Twin", "Syro", 77)];
    server.mock_top_albums("rj", &albums, 310).await;
    let client = client_for(&server);

    let page = client
        .user()
        .get_top_albums("rj", TopOptions::default())
        .await
        .unwrap()
        .expect("listing present");

    assert_eq!(page.total, 310);
    let album = &page.items[0];
    assert_eq!(album.artist, "Aphex Twin");
    assert_eq!(album.title, "Syro");
    assert_eq!(album.playcount, 77);
    assert!(album.image.is_some());

    let query = single_query(&server).await;
    assert_eq!(query["method"], "user.gettopalbums");
    assert_eq!(query["period"], "overall");
}

#[tokio::test]
async fn test_get_top_tracks() {
    let server = MockLastfmServer::start().await;
    let tracks = vec![
        TrackFixture::new("Burial", "Archangel", "Untrue").with_playcount(64),
        TrackFixture::new("Burial", "Near Dark", "Untrue").with_playcount(31),
    ];
    server.mock_top_tracks("rj", &tracks, 2).await;
    let client = client_for(&server);

    let page = client
        .user()
        .get_top_tracks("rj", TopOptions::default().period("12month").page(2))
        .await
        .unwrap()
        .expect("listing present");

    assert_eq!(page.items[0].artist, "Burial");
    assert_eq!(page.items[0].title, "Archangel");
    assert_eq!(page.items[0].playcount, Some(64));
    assert_eq!(page.items[1].rank, Some(2));
    assert!(page.items.iter().all(|t| !t.now_playing));

    let query = single_query(&server).await;
    assert_eq!(query["method"], "user.gettoptracks");
    assert_eq!(query["period"], "12month");
    assert_eq!(query["page"], "2");
}

#[tokio::test]
async fn test_get_top_tags_total_is_page_length() {
    let server = MockLastfmServer::start().await;
    let tags = vec![
        TagFixture::new("electronic", 42),
        TagFixture::new("ambient", 17),
        TagFixture::new("idm", 9),
    ];
    server.mock_top_tags("rj", &tags).await;
    let client = client_for(&server);

    let page = client
        .user()
        .get_top_tags("rj", TagOptions::default().limit(3))
        .await
        .unwrap()
        .expect("listing present");

    assert_eq!(page.total, 3);
    assert_eq!(page.items[0].name, "electronic");
    assert_eq!(page.items[0].count, 42);
    assert_eq!(page.items[2].url, "https://www.last.fm/tag/idm");

    let query = single_query(&server).await;
    assert_eq!(query["method"], "user.gettoptags");
    assert_eq!(query["limit"], "3");
    assert_eq!(query["page"], "1");
}

// ============================================================================
// user.getweekly*chart
// ============================================================================

fn last_week() -> ChartRange {
    ChartRange::between(
        NaiveDate::from_ymd_opt(2023, 11, 14).unwrap(),
        NaiveDate::from_ymd_opt(2023, 11, 21).unwrap(),
    )
}

#[test_log::test(tokio::test)]
async fn test_get_weekly_artist_chart() {
    let server = MockLastfmServer::start().await;
    let artists = vec![
        ArtistFixture::new("Four Tet", 23),
        ArtistFixture::new("Floating Points", 11),
    ];
    server.mock_weekly_artist_chart("rj", &artists).await;
    let client = client_for(&server);

    let page = client
        .user()
        .get_weekly_artist_chart("rj", last_week())
        .await
        .unwrap()
        .expect("listing present");

    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].name, "Four Tet");
    assert_eq!(page.items[0].playcount, 23);
    assert_eq!(page.items[0].image, None);

    let query = single_query(&server).await;
    assert_eq!(query["method"], "user.getweeklyartistchart");
    assert_eq!(query["from"], "2023-11-14");
    assert_eq!(query["to"], "2023-11-21");
}

#[tokio::test]
async fn test_get_weekly_album_chart() {
    let server = MockLastfmServer::start().await;
    let albums = vec![AlbumFixture::new("Burial", "Untrue", 14)];
    server.mock_weekly_album_chart("rj", &albums).await;
    let client = client_for(&server);

    let page = client
        .user()
        .get_weekly_album_chart("rj", last_week())
        .await
        .unwrap()
        .expect("listing present");

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].artist, "Burial");
    assert_eq!(page.items[0].title, "Untrue");
    assert_eq!(page.items[0].playcount, 14);
    assert_eq!(page.items[0].rank, Some(1));

    let query = single_query(&server).await;
    assert_eq!(query["method"], "user.getweeklyalbumchart");
}

#[tokio::test]
async fn test_get_weekly_track_chart_without_range() {
    let server = MockLastfmServer::start().await;
    let tracks = vec![TrackFixture::new("Burial", "Archangel", "Untrue").with_playcount(5)];
    server.mock_weekly_track_chart("rj", &tracks).await;
    let client = client_for(&server);

    let page = client
        .user()
        .get_weekly_track_chart("rj", ChartRange::default())
        .await
        .unwrap()
        .expect("listing present");

    assert_eq!(page.items[0].artist, "Burial");
    assert_eq!(page.items[0].playcount, Some(5));

    let query = single_query(&server).await;
    assert_eq!(query["method"], "user.getweeklytrackchart");
    assert!(!query.contains_key("from"));
    assert!(!query.contains_key("to"));
}

// ============================================================================
// Sentinel and Listing
// ============================================================================

#[tokio::test]
async fn test_missing_listing_is_none() {
    let server = MockLastfmServer::start().await;
    server.mock_method("user.gettopartists", json!({})).await;
    server
        .mock_method("user.getweeklytrackchart", json!({"weeklytrackchart": null}))
        .await;
    let client = client_for(&server);

    let artists = client
        .user()
        .get_top_artists("rj", TopOptions::default())
        .await
        .unwrap();
    assert!(artists.is_none());

    let chart = client
        .user()
        .get_weekly_track_chart("rj", ChartRange::default())
        .await
        .unwrap();
    assert!(chart.is_none());
}

#[tokio::test]
async fn test_empty_listing_is_some_and_empty() {
    let server = MockLastfmServer::start().await;
    server
        .mock_method(
            "user.gettoptags",
            json!({"toptags": {"tag": [], "@attr": {"user": "rj"}}}),
        )
        .await;
    let client = client_for(&server);

    let page = client
        .user()
        .get_top_tags("rj", TagOptions::default())
        .await
        .unwrap()
        .expect("listing present");

    assert!(page.is_empty());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_results_convert_into_listing() {
    let server = MockLastfmServer::start().await;
    server.mock_user_info(&UserFixture::new("rj")).await;
    server
        .mock_top_albums("rj", &[AlbumFixture::new("Low", "Double Negative", 3)], 90)
        .await;
    let client = client_for(&server);

    let user: Listing = client.user().get_info("rj").await.unwrap().into();
    assert_eq!(user.kind(), "user");
    assert_eq!(user.len(), 1);

    let albums: Listing = client
        .user()
        .get_top_albums("rj", TopOptions::default())
        .await
        .unwrap()
        .expect("listing present")
        .into();
    assert_eq!(albums.kind(), "albums");
    assert_eq!(albums.len(), 1);
    assert_eq!(albums.total(), 90);
}
