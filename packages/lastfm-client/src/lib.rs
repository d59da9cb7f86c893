//! Last.fm API client for user listening history
//!
//! This crate provides typed access to the `user.*` methods of the Last.fm
//! web service:
//! - Profile info
//! - Recent tracks, including the track playing now
//! - Top artists, albums, tracks and tags
//! - Weekly artist, album and track charts
//!
//! # Example
//!
//! ```rust,no_run
//! use lastfm_history_client::{LastfmClient, LastfmConfig, Period, TopOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LastfmClient::new(&LastfmConfig::new("your_api_key"))?;
//!
//! let user = client.user().get_info("rj").await?;
//! println!("{} has {:?} scrobbles", user.name, user.playcount);
//!
//! let options = TopOptions::default().period(Period::SevenDays).limit(10);
//! if let Some(page) = client.user().get_top_artists("rj", options).await? {
//!     for artist in &page {
//!         println!("{:>2}. {} ({} plays)", artist.rank.unwrap_or(0), artist.name, artist.playcount);
//!     }
//! }
//!
//! client.close();
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `LASTFM_API_KEY`: API key for Last.fm (required by [`LastfmClient::from_env`])
//! - `LASTFM_API_URL`: endpoint override
//! - `LASTFM_USER_AGENT`: user agent for connections the client opens itself

mod client;
mod connection;
mod de;
mod decode;
mod error;
mod image;
mod models;
mod request;
mod user;

pub use client::LastfmClient;
pub use error::{ErrorKind, LastfmError, LastfmResult, ServiceError};
pub use image::Image;
pub use lastfm_history_config::LastfmConfig;
pub use models::{Album, Artist, Listing, PagedResult, Period, Tag, Track, User};
pub use request::{ChartRange, RecentTracksOptions, TagOptions, TopOptions};
pub use user::UserApi;
