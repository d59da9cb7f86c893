//! `user.*` methods

use tracing::{debug, instrument};

use crate::client::LastfmClient;
use crate::decode;
use crate::error::LastfmResult;
use crate::models::{Album, Artist, PagedResult, Tag, Track, User};
use crate::request::{for_user, ChartRange, RecentTracksOptions, TagOptions, TopOptions};

/// User listening-history methods, borrowed from a [`LastfmClient`]
///
/// Listing methods return `Ok(None)` when the service answers without the
/// listing at all, and `Ok(Some(page))` (possibly empty) otherwise.
#[derive(Clone, Copy)]
pub struct UserApi<'a> {
    client: &'a LastfmClient,
}

fn log_page<T>(method: &str, page: &Option<PagedResult<T>>) {
    match page {
        Some(page) => debug!(
            method,
            result_count = page.len(),
            total = page.total,
            "Received listing"
        ),
        None => debug!(method, "Response carried no listing"),
    }
}

impl<'a> UserApi<'a> {
    pub(crate) fn new(client: &'a LastfmClient) -> Self {
        Self { client }
    }

    /// Get a user's profile
    ///
    /// # Errors
    /// - `LastfmError::Service` - If Last.fm returns an error (e.g. unknown user)
    /// - `LastfmError::Decode` - If the profile lacks `name` or `registered`
    /// - `LastfmError::Http` - If the HTTP request fails
    #[instrument(skip(self))]
    pub async fn get_info(&self, username: &str) -> LastfmResult<User> {
        let body = self
            .client
            .call("user.getinfo", &for_user(username, Vec::new()))
            .await?;
        decode::user_info(body)
    }

    /// Get the tracks a user scrobbled most recently, including the one
    /// playing now
    #[instrument(skip(self))]
    pub async fn get_recent_tracks(
        &self,
        username: &str,
        options: RecentTracksOptions,
    ) -> LastfmResult<Option<PagedResult<Track>>> {
        let method = "user.getrecenttracks";
        let body = self
            .client
            .call(method, &for_user(username, options.params()))
            .await?;
        let page = decode::recent_tracks(body, options.extended)?;
        log_page(method, &page);
        Ok(page)
    }

    /// Get a user's most played artists over a period
    #[instrument(skip(self))]
    pub async fn get_top_artists(
        &self,
        username: &str,
        options: TopOptions,
    ) -> LastfmResult<Option<PagedResult<Artist>>> {
        let method = "user.gettopartists";
        let body = self
            .client
            .call(method, &for_user(username, options.params()))
            .await?;
        let page = decode::top_artists(body)?;
        log_page(method, &page);
        Ok(page)
    }

    /// Get a user's most played albums over a period
    #[instrument(skip(self))]
    pub async fn get_top_albums(
        &self,
        username: &str,
        options: TopOptions,
    ) -> LastfmResult<Option<PagedResult<Album>>> {
        let method = "user.gettopalbums";
        let body = self
            .client
            .call(method, &for_user(username, options.params()))
            .await?;
        let page = decode::top_albums(body)?;
        log_page(method, &page);
        Ok(page)
    }

    /// Get a user's most played tracks over a period
    #[instrument(skip(self))]
    pub async fn get_top_tracks(
        &self,
        username: &str,
        options: TopOptions,
    ) -> LastfmResult<Option<PagedResult<Track>>> {
        let method = "user.gettoptracks";
        let body = self
            .client
            .call(method, &for_user(username, options.params()))
            .await?;
        let page = decode::top_tracks(body)?;
        log_page(method, &page);
        Ok(page)
    }

    /// Get the tags a user applied most
    ///
    /// The total is the number of returned tags.
    #[instrument(skip(self))]
    pub async fn get_top_tags(
        &self,
        username: &str,
        options: TagOptions,
    ) -> LastfmResult<Option<PagedResult<Tag>>> {
        let method = "user.gettoptags";
        let body = self
            .client
            .call(method, &for_user(username, options.params()))
            .await?;
        let page = decode::top_tags(body)?;
        log_page(method, &page);
        Ok(page)
    }

    /// Get a user's artist chart for a date range
    #[instrument(skip(self))]
    pub async fn get_weekly_artist_chart(
        &self,
        username: &str,
        range: ChartRange,
    ) -> LastfmResult<Option<PagedResult<Artist>>> {
        let method = "user.getweeklyartistchart";
        let body = self
            .client
            .call(method, &for_user(username, range.params()))
            .await?;
        let page = decode::weekly_artist_chart(body)?;
        log_page(method, &page);
        Ok(page)
    }

    /// Get a user's album chart for a date range
    #[instrument(skip(self))]
    pub async fn get_weekly_album_chart(
        &self,
        username: &str,
        range: ChartRange,
    ) -> LastfmResult<Option<PagedResult<Album>>> {
        let method = "user.getweeklyalbumchart";
        let body = self
            .client
            .call(method, &for_user(username, range.params()))
            .await?;
        let page = decode::weekly_album_chart(body)?;
        log_page(method, &page);
        Ok(page)
    }

    /// Get a user's track chart for a date range
    #[instrument(skip(self))]
    pub async fn get_weekly_track_chart(
        &self,
        username: &str,
        range: ChartRange,
    ) -> LastfmResult<Option<PagedResult<Track>>> {
        let method = "user.getweeklytrackchart";
        let body = self
            .client
            .call(method, &for_user(username, range.params()))
            .await?;
        let page = decode::weekly_track_chart(body)?;
        log_page(method, &page);
        Ok(page)
    }
}
