//! Per-endpoint response decoders
//!
//! Each decoder takes the JSON body of a successful call and maps it onto the
//! canonical models. Nested artist/album objects come in two shapes,
//! `{"name": ..}` and `{"#text": ..}`; which one applies is fixed per endpoint:
//!
//! | Endpoint            | Artist     | Album              |
//! |---------------------|------------|--------------------|
//! | `recenttracks`      | `#text`    | `#text`            |
//! | `topartists`        | `name`     | -                  |
//! | `topalbums`         | `name`     | `name` (top level) |
//! | `toptracks`         | `name`     | -                  |
//! | `weeklyartistchart` | top level  | -                  |
//! | `weeklyalbumchart`  | `#text`    | `name` (top level) |
//! | `weeklytrackchart`  | `#text`    | -                  |
//!
//! Extended recent tracks carry the artist as `name` instead.
//!
//! A listing key that is absent (or `null`) decodes to `None`; an empty listing
//! decodes to an empty page.

use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use serde_json::Value;

use crate::de::{number, one_or_many, opt_number};
use crate::error::{LastfmError, LastfmResult};
use crate::image::{self, ImageRecord};
use crate::models::{Album, Artist, PagedResult, Tag, Track, User};

/// Artist nested as `{"name": ..}`
#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

/// Artist or album nested as `{"#text": ..}`
#[derive(Debug, Deserialize)]
struct TextRef {
    #[serde(rename = "#text")]
    text: String,
}

trait NestedName {
    fn into_name(self) -> String;
}

impl NestedName for NamedRef {
    fn into_name(self) -> String {
        self.name
    }
}

impl NestedName for TextRef {
    fn into_name(self) -> String {
        self.text
    }
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "R: DeserializeOwned"))]
struct RawPage<R> {
    #[serde(
        alias = "track",
        alias = "artist",
        alias = "album",
        alias = "tag",
        deserialize_with = "one_or_many"
    )]
    items: Vec<R>,
    #[serde(rename = "@attr", default)]
    attr: Option<PageAttr>,
}

#[derive(Debug, Deserialize)]
struct PageAttr {
    #[serde(default, deserialize_with = "opt_number")]
    total: Option<u64>,
}

impl<R> RawPage<R> {
    /// Page using the service-reported total, or the page length without one
    fn reported<T>(self, map: impl FnMut(R) -> T) -> PagedResult<T> {
        let items: Vec<T> = self.items.into_iter().map(map).collect();
        match self.attr.and_then(|attr| attr.total) {
            Some(total) => PagedResult::new(items, total),
            None => PagedResult::counted(items),
        }
    }

    /// Page whose total is the number of returned entries
    fn counted<T>(self, map: impl FnMut(R) -> T) -> PagedResult<T> {
        PagedResult::counted(self.items.into_iter().map(map).collect())
    }
}

#[derive(Debug, Deserialize)]
struct RankAttr {
    #[serde(default, deserialize_with = "opt_number")]
    rank: Option<u32>,
}

fn rank(attr: Option<RankAttr>) -> Option<u32> {
    attr.and_then(|attr| attr.rank)
}

#[derive(Debug, Deserialize)]
struct RawUser {
    name: String,
    #[serde(default)]
    realname: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(rename = "type", default)]
    user_type: Option<String>,
    registered: RawRegistered,
    #[serde(default, deserialize_with = "opt_number")]
    age: Option<u64>,
    #[serde(default, deserialize_with = "opt_number")]
    subscriber: Option<u64>,
    #[serde(default, deserialize_with = "opt_number")]
    bootstrap: Option<u64>,
    #[serde(default, deserialize_with = "opt_number")]
    playcount: Option<u64>,
    #[serde(default, deserialize_with = "opt_number")]
    artist_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_number")]
    playlists: Option<u64>,
    #[serde(default, deserialize_with = "opt_number")]
    track_count: Option<u64>,
    #[serde(default, deserialize_with = "opt_number")]
    album_count: Option<u64>,
    #[serde(default)]
    image: Option<Vec<ImageRecord>>,
}

#[derive(Debug, Deserialize)]
struct RawRegistered {
    #[serde(deserialize_with = "number")]
    unixtime: i64,
}

#[derive(Debug, Deserialize)]
struct RawRecentTrack<A> {
    artist: A,
    name: String,
    #[serde(default)]
    album: Option<TextRef>,
    #[serde(default)]
    image: Option<Vec<ImageRecord>>,
    #[serde(rename = "@attr", default)]
    attr: Option<NowPlayingAttr>,
}

#[derive(Debug, Deserialize)]
struct NowPlayingAttr {
    #[serde(default)]
    nowplaying: Option<IgnoredAny>,
}

#[derive(Debug, Deserialize)]
struct RawTopArtist {
    name: String,
    #[serde(deserialize_with = "number")]
    playcount: u64,
    #[serde(default)]
    image: Option<Vec<ImageRecord>>,
    #[serde(rename = "@attr", default)]
    attr: Option<RankAttr>,
}

#[derive(Debug, Deserialize)]
struct RawTopAlbum {
    artist: NamedRef,
    name: String,
    #[serde(deserialize_with = "number")]
    playcount: u64,
    #[serde(default)]
    image: Option<Vec<ImageRecord>>,
    #[serde(rename = "@attr", default)]
    attr: Option<RankAttr>,
}

/// Top-tracks and weekly-track-chart entries differ only in artist nesting
#[derive(Debug, Deserialize)]
struct RawRankedTrack<A> {
    artist: A,
    name: String,
    #[serde(default, deserialize_with = "opt_number")]
    playcount: Option<u64>,
    #[serde(default)]
    image: Option<Vec<ImageRecord>>,
    #[serde(rename = "@attr", default)]
    attr: Option<RankAttr>,
}

#[derive(Debug, Deserialize)]
struct RawTag {
    name: String,
    #[serde(deserialize_with = "number")]
    count: u64,
    url: String,
}

#[derive(Debug, Deserialize)]
struct RawChartArtist {
    name: String,
    #[serde(default, deserialize_with = "opt_number")]
    playcount: Option<u64>,
    #[serde(default)]
    image: Option<Vec<ImageRecord>>,
    #[serde(rename = "@attr", default)]
    attr: Option<RankAttr>,
}

#[derive(Debug, Deserialize)]
struct RawChartAlbum {
    artist: TextRef,
    name: String,
    #[serde(deserialize_with = "number")]
    playcount: u64,
    #[serde(default)]
    image: Option<Vec<ImageRecord>>,
    #[serde(rename = "@attr", default)]
    attr: Option<RankAttr>,
}

/// Take the object under `key`, treating `null` like a missing key
fn take_key(body: &mut Value, key: &str) -> Option<Value> {
    body.get_mut(key)
        .map(Value::take)
        .filter(|value| !value.is_null())
}

fn page<R: DeserializeOwned>(body: &mut Value, key: &str) -> LastfmResult<Option<RawPage<R>>> {
    take_key(body, key)
        .map(serde_json::from_value::<RawPage<R>>)
        .transpose()
        .map_err(LastfmError::from)
}

fn decode_error(message: &str) -> LastfmError {
    LastfmError::Decode(<serde_json::Error as serde::de::Error>::custom(message))
}

/// Decode a `user.getinfo` body
pub(crate) fn user_info(mut body: Value) -> LastfmResult<User> {
    let raw = take_key(&mut body, "user")
        .map(serde_json::from_value::<RawUser>)
        .transpose()?
        .ok_or_else(|| decode_error("missing field `user`"))?;

    let registered = DateTime::<Utc>::from_timestamp(raw.registered.unixtime, 0)
        .ok_or_else(|| decode_error("registration timestamp out of range"))?;

    Ok(User {
        name: raw.name,
        realname: raw.realname,
        country: raw.country,
        gender: raw.gender,
        url: raw.url,
        user_type: raw.user_type,
        registered,
        age: raw.age,
        subscriber: raw.subscriber,
        bootstrap: raw.bootstrap,
        playcount: raw.playcount,
        artist_count: raw.artist_count,
        playlists: raw.playlists,
        track_count: raw.track_count,
        album_count: raw.album_count,
        image: image::normalize(raw.image.as_deref()),
    })
}

/// Decode a `user.getrecenttracks` body
///
/// `extended` must match the flag the request was issued with: extended
/// responses nest the artist as `{"name": ..}`.
pub(crate) fn recent_tracks(
    mut body: Value,
    extended: bool,
) -> LastfmResult<Option<PagedResult<Track>>> {
    if extended {
        Ok(page::<RawRecentTrack<NamedRef>>(&mut body, "recenttracks")?
            .map(|page| page.reported(recent_track)))
    } else {
        Ok(page::<RawRecentTrack<TextRef>>(&mut body, "recenttracks")?
            .map(|page| page.reported(recent_track)))
    }
}

fn recent_track<A: NestedName>(raw: RawRecentTrack<A>) -> Track {
    Track {
        artist: raw.artist.into_name(),
        title: raw.name,
        album: raw
            .album
            .map(NestedName::into_name)
            .filter(|album| !album.is_empty()),
        image: image::normalize(raw.image.as_deref()),
        now_playing: raw
            .attr
            .map_or(false, |attr| attr.nowplaying.is_some()),
        rank: None,
        playcount: None,
    }
}

/// Decode a `user.gettopartists` body
pub(crate) fn top_artists(mut body: Value) -> LastfmResult<Option<PagedResult<Artist>>> {
    Ok(page::<RawTopArtist>(&mut body, "topartists")?.map(|page| {
        page.reported(|raw| Artist {
            name: raw.name,
            image: image::normalize(raw.image.as_deref()),
            playcount: raw.playcount,
            rank: rank(raw.attr),
        })
    }))
}

/// Decode a `user.gettopalbums` body
pub(crate) fn top_albums(mut body: Value) -> LastfmResult<Option<PagedResult<Album>>> {
    Ok(page::<RawTopAlbum>(&mut body, "topalbums")?.map(|page| {
        page.reported(|raw| Album {
            artist: raw.artist.into_name(),
            title: raw.name,
            image: image::normalize(raw.image.as_deref()),
            rank: rank(raw.attr),
            playcount: raw.playcount,
        })
    }))
}

/// Decode a `user.gettoptracks` body
pub(crate) fn top_tracks(mut body: Value) -> LastfmResult<Option<PagedResult<Track>>> {
    Ok(page::<RawRankedTrack<NamedRef>>(&mut body, "toptracks")?
        .map(|page| page.reported(ranked_track)))
}

/// Decode a `user.gettoptags` body
///
/// The service reports no total for this listing; the page length is used.
pub(crate) fn top_tags(mut body: Value) -> LastfmResult<Option<PagedResult<Tag>>> {
    Ok(page::<RawTag>(&mut body, "toptags")?.map(|page| {
        page.counted(|raw| Tag {
            name: raw.name,
            count: raw.count,
            url: raw.url,
        })
    }))
}

/// Decode a `user.getweeklyartistchart` body
pub(crate) fn weekly_artist_chart(mut body: Value) -> LastfmResult<Option<PagedResult<Artist>>> {
    Ok(
        page::<RawChartArtist>(&mut body, "weeklyartistchart")?.map(|page| {
            page.counted(|raw| Artist {
                name: raw.name,
                image: image::normalize(raw.image.as_deref()),
                playcount: raw.playcount.unwrap_or(0),
                rank: rank(raw.attr),
            })
        }),
    )
}

/// Decode a `user.getweeklyalbumchart` body
pub(crate) fn weekly_album_chart(mut body: Value) -> LastfmResult<Option<PagedResult<Album>>> {
    Ok(
        page::<RawChartAlbum>(&mut body, "weeklyalbumchart")?.map(|page| {
            page.counted(|raw| Album {
                artist: raw.artist.into_name(),
                title: raw.name,
                image: image::normalize(raw.image.as_deref()),
                rank: rank(raw.attr),
                playcount: raw.playcount,
            })
        }),
    )
}

/// Decode a `user.getweeklytrackchart` body
pub(crate) fn weekly_track_chart(mut body: Value) -> LastfmResult<Option<PagedResult<Track>>> {
    Ok(page::<RawRankedTrack<TextRef>>(&mut body, "weeklytrackchart")?
        .map(|page| page.counted(ranked_track)))
}

fn ranked_track<A: NestedName>(raw: RawRankedTrack<A>) -> Track {
    Track {
        artist: raw.artist.into_name(),
        title: raw.name,
        album: None,
        image: image::normalize(raw.image.as_deref()),
        now_playing: false,
        rank: rank(raw.attr),
        playcount: raw.playcount,
    }
}
