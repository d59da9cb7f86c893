//! Canonical listening-history models

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::image::Image;

/// A Last.fm user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub realname: Option<String>,
    pub country: Option<String>,
    pub gender: Option<String>,
    /// URL to the Last.fm profile page
    pub url: Option<String>,
    /// Account type (e.g. "user", "subscriber", "staff")
    pub user_type: Option<String>,
    /// When the account was registered
    pub registered: DateTime<Utc>,
    pub age: Option<u64>,
    pub subscriber: Option<u64>,
    pub bootstrap: Option<u64>,
    pub playcount: Option<u64>,
    pub artist_count: Option<u64>,
    pub playlists: Option<u64>,
    pub track_count: Option<u64>,
    pub album_count: Option<u64>,
    pub image: Option<Image>,
}

/// A track from a recent-tracks, top-tracks or chart listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub artist: String,
    pub title: String,
    pub album: Option<String>,
    pub image: Option<Image>,
    /// Whether the user is listening to this track right now
    pub now_playing: bool,
    /// Position in a top or chart listing
    pub rank: Option<u32>,
    pub playcount: Option<u64>,
}

/// An artist from a top-artists or chart listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    pub image: Option<Image>,
    /// Zero when the listing does not report plays
    pub playcount: u64,
    pub rank: Option<u32>,
}

/// An album from a top-albums or chart listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub artist: String,
    pub title: String,
    pub image: Option<Image>,
    pub rank: Option<u32>,
    pub playcount: u64,
}

/// A tag the user applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    /// Number of times the user applied it
    pub count: u64,
    pub url: String,
}

/// One page of a listing plus the total the service reported
///
/// `total` may exceed `items.len()`; callers paginate by requesting further
/// pages themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Page whose total is its own length
    pub(crate) fn counted(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self { items, total }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for PagedResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Result of any user operation, tagged by entity kind
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    User(User),
    Tracks(PagedResult<Track>),
    Artists(PagedResult<Artist>),
    Albums(PagedResult<Album>),
    Tags(PagedResult<Tag>),
}

impl Listing {
    /// Entity kind carried by this listing
    pub fn kind(&self) -> &'static str {
        match self {
            Listing::User(_) => "user",
            Listing::Tracks(_) => "tracks",
            Listing::Artists(_) => "artists",
            Listing::Albums(_) => "albums",
            Listing::Tags(_) => "tags",
        }
    }

    /// Number of entities on this page
    pub fn len(&self) -> usize {
        match self {
            Listing::User(_) => 1,
            Listing::Tracks(page) => page.len(),
            Listing::Artists(page) => page.len(),
            Listing::Albums(page) => page.len(),
            Listing::Tags(page) => page.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total reported for the listing; 1 for a user profile
    pub fn total(&self) -> u64 {
        match self {
            Listing::User(_) => 1,
            Listing::Tracks(page) => page.total,
            Listing::Artists(page) => page.total,
            Listing::Albums(page) => page.total,
            Listing::Tags(page) => page.total,
        }
    }
}

impl From<User> for Listing {
    fn from(user: User) -> Self {
        Listing::User(user)
    }
}

impl From<PagedResult<Track>> for Listing {
    fn from(page: PagedResult<Track>) -> Self {
        Listing::Tracks(page)
    }
}

impl From<PagedResult<Artist>> for Listing {
    fn from(page: PagedResult<Artist>) -> Self {
        Listing::Artists(page)
    }
}

impl From<PagedResult<Album>> for Listing {
    fn from(page: PagedResult<Album>) -> Self {
        Listing::Albums(page)
    }
}

impl From<PagedResult<Tag>> for Listing {
    fn from(page: PagedResult<Tag>) -> Self {
        Listing::Tags(page)
    }
}

/// Time range accepted by the top-* methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Overall,
    SevenDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Overall => "overall",
            Period::SevenDays => "7day",
            Period::OneMonth => "1month",
            Period::ThreeMonths => "3month",
            Period::SixMonths => "6month",
            Period::TwelveMonths => "12month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.as_str().to_string()
    }
}
