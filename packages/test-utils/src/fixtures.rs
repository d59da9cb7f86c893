//! JSON fixtures in the shapes the Last.fm `user.*` methods return
//!
//! The same entity is nested differently depending on the method, so each
//! fixture renders one JSON shape per listing it can appear in.

use serde_json::{json, Value};

/// Fixture for the `image` array carried by most entities
#[derive(Debug, Clone)]
pub struct ImageFixture {
    pub size: String,
    pub url: String,
}

impl ImageFixture {
    pub fn new(size: &str, url: &str) -> Self {
        Self {
            size: size.to_string(),
            url: url.to_string(),
        }
    }

    /// The four standard sizes for one artwork id
    pub fn standard_set(id: &str) -> Vec<Self> {
        [("small", 34), ("medium", 64), ("large", 174), ("extralarge", 300)]
            .into_iter()
            .map(|(size, px)| {
                Self::new(
                    size,
                    &format!("https://lastfm.freetls.fastly.net/i/u/{}s/{}.png", px, id),
                )
            })
            .collect()
    }

    pub fn to_json(&self) -> Value {
        json!({"size": self.size, "#text": self.url})
    }
}

fn images_json(images: &[ImageFixture]) -> Vec<Value> {
    images.iter().map(ImageFixture::to_json).collect()
}

fn mbid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Fixture for `user.getinfo`
#[derive(Debug, Clone)]
pub struct UserFixture {
    pub name: String,
    pub realname: String,
    pub country: String,
    pub playcount: u64,
    pub registered: i64,
    pub images: Vec<ImageFixture>,
}

impl UserFixture {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            realname: format!("{} Listener", name),
            country: "United Kingdom".to_string(),
            playcount: 150_316,
            registered: 1_037_793_040,
            images: ImageFixture::standard_set(name),
        }
    }

    /// Full `user.getinfo` response body
    pub fn to_json(&self) -> Value {
        json!({
            "user": {
                "name": self.name,
                "age": "0",
                "subscriber": "0",
                "realname": self.realname,
                "bootstrap": "0",
                "playcount": self.playcount.to_string(),
                "artist_count": "12749",
                "playlists": "0",
                "track_count": "57066",
                "album_count": "26658",
                "image": images_json(&self.images),
                "registered": {
                    "unixtime": self.registered.to_string(),
                    "#text": self.registered
                },
                "country": self.country,
                "gender": "n",
                "url": format!("https://www.last.fm/user/{}", self.name),
                "type": "user"
            }
        })
    }
}

/// Fixture for tracks in recent, top and chart listings
#[derive(Debug, Clone)]
pub struct TrackFixture {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub playcount: u64,
    pub now_playing: bool,
    pub images: Vec<ImageFixture>,
}

impl TrackFixture {
    pub fn new(artist: &str, title: &str, album: &str) -> Self {
        Self {
            artist: artist.to_string(),
            title: title.to_string(),
            album: album.to_string(),
            playcount: 1,
            now_playing: false,
            images: ImageFixture::standard_set(title),
        }
    }

    pub fn playing(mut self) -> Self {
        self.now_playing = true;
        self
    }

    pub fn with_playcount(mut self, playcount: u64) -> Self {
        self.playcount = playcount;
        self
    }

    /// `recenttracks` entry: artist and album nested as `#text`
    pub fn recent_json(&self) -> Value {
        let mut track = json!({
            "artist": {"mbid": mbid(), "#text": self.artist},
            "streamable": "0",
            "image": images_json(&self.images),
            "mbid": mbid(),
            "album": {"mbid": "", "#text": self.album},
            "name": self.title,
            "url": format!("https://www.last.fm/music/{}/_/{}", self.artist, self.title)
        });
        if self.now_playing {
            track["@attr"] = json!({"nowplaying": "true"});
        } else {
            track["date"] = json!({"uts": "1700000000", "#text": "14 Nov 2023, 22:13"});
        }
        track
    }

    /// Extended `recenttracks` entry: artist nested as `name`
    pub fn recent_extended_json(&self) -> Value {
        let mut track = self.recent_json();
        track["artist"] = json!({
            "url": format!("https://www.last.fm/music/{}", self.artist),
            "name": self.artist,
            "image": [],
            "mbid": ""
        });
        track["loved"] = json!("0");
        track
    }

    /// `toptracks` entry: artist nested as `name`
    pub fn top_json(&self, rank: u32) -> Value {
        json!({
            "streamable": {"fulltrack": "0", "#text": "0"},
            "mbid": mbid(),
            "name": self.title,
            "image": images_json(&self.images),
            "artist": {
                "url": format!("https://www.last.fm/music/{}", self.artist),
                "name": self.artist,
                "mbid": ""
            },
            "url": format!("https://www.last.fm/music/{}/_/{}", self.artist, self.title),
            "duration": "0",
            "@attr": {"rank": rank.to_string()},
            "playcount": self.playcount.to_string()
        })
    }

    /// `weeklytrackchart` entry: artist nested as `#text`
    pub fn chart_json(&self, rank: u32) -> Value {
        json!({
            "artist": {"mbid": "", "#text": self.artist},
            "image": images_json(&self.images),
            "mbid": "",
            "url": format!("https://www.last.fm/music/{}/_/{}", self.artist, self.title),
            "name": self.title,
            "@attr": {"rank": rank.to_string()},
            "playcount": self.playcount.to_string()
        })
    }
}

/// Fixture for artists in top and chart listings
#[derive(Debug, Clone)]
pub struct ArtistFixture {
    pub name: String,
    pub playcount: u64,
    pub images: Vec<ImageFixture>,
}

impl ArtistFixture {
    pub fn new(name: &str, playcount: u64) -> Self {
        Self {
            name: name.to_string(),
            playcount,
            images: ImageFixture::standard_set(name),
        }
    }

    /// `topartists` entry
    pub fn top_json(&self, rank: u32) -> Value {
        json!({
            "streamable": "0",
            "image": images_json(&self.images),
            "mbid": mbid(),
            "url": format!("https://www.last.fm/music/{}", self.name),
            "playcount": self.playcount.to_string(),
            "@attr": {"rank": rank.to_string()},
            "name": self.name
        })
    }

    /// `weeklyartistchart` entry: name at the top level, no artwork
    pub fn chart_json(&self, rank: u32) -> Value {
        json!({
            "mbid": mbid(),
            "url": format!("https://www.last.fm/music/{}", self.name),
            "name": self.name,
            "@attr": {"rank": rank.to_string()},
            "playcount": self.playcount.to_string()
        })
    }
}

/// Fixture for albums in top and chart listings
#[derive(Debug, Clone)]
pub struct AlbumFixture {
    pub artist: String,
    pub title: String,
    pub playcount: u64,
    pub images: Vec<ImageFixture>,
}

impl AlbumFixture {
    pub fn new(artist: &str, title: &str, playcount: u64) -> Self {
        Self {
            artist: artist.to_string(),
            title: title.to_string(),
            playcount,
            images: ImageFixture::standard_set(title),
        }
    }

    /// `topalbums` entry: artist nested as `name`
    pub fn top_json(&self, rank: u32) -> Value {
        json!({
            "artist": {
                "url": format!("https://www.last.fm/music/{}", self.artist),
                "name": self.artist,
                "mbid": ""
            },
            "image": images_json(&self.images),
            "mbid": mbid(),
            "url": format!("https://www.last.fm/music/{}/{}", self.artist, self.title),
            "playcount": self.playcount.to_string(),
            "@attr": {"rank": rank.to_string()},
            "name": self.title
        })
    }

    /// `weeklyalbumchart` entry: artist nested as `#text`
    pub fn chart_json(&self, rank: u32) -> Value {
        json!({
            "artist": {"mbid": "", "#text": self.artist},
            "mbid": mbid(),
            "url": format!("https://www.last.fm/music/{}/{}", self.artist, self.title),
            "name": self.title,
            "@attr": {"rank": rank.to_string()},
            "playcount": self.playcount.to_string()
        })
    }
}

/// Fixture for `toptags` entries
#[derive(Debug, Clone)]
pub struct TagFixture {
    pub name: String,
    pub count: u64,
}

impl TagFixture {
    pub fn new(name: &str, count: u64) -> Self {
        Self {
            name: name.to_string(),
            count,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "count": self.count,
            "url": format!("https://www.last.fm/tag/{}", self.name)
        })
    }
}

/// Wrap listing entries the way the service does: `{key: {item_key: [...], "@attr": {...}}}`
pub fn listing_json(key: &str, item_key: &str, items: Vec<Value>, attr: Value) -> Value {
    json!({
        key: {
            item_key: items,
            "@attr": attr
        }
    })
}

/// `@attr` block of a paginated listing
pub fn page_attr(user: &str, page: u32, per_page: u32, total: u64) -> Value {
    let total_pages = if per_page == 0 {
        0
    } else {
        (total + u64::from(per_page) - 1) / u64::from(per_page)
    };
    json!({
        "user": user,
        "page": page.to_string(),
        "perPage": per_page.to_string(),
        "totalPages": total_pages.to_string(),
        "total": total.to_string()
    })
}

/// `@attr` block of a weekly chart
pub fn chart_attr(user: &str) -> Value {
    json!({"user": user, "from": "1700000000", "to": "1700604800"})
}
