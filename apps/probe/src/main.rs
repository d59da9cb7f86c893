use anyhow::Context;
use chrono::{Days, Utc};
use lastfm_history_client::{
    ChartRange, LastfmClient, LastfmResult, Listing, RecentTracksOptions, TagOptions, TopOptions,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lastfm_history=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let username = std::env::args()
        .nth(1)
        .context("usage: lastfm-history-probe <username>")?;

    let client = LastfmClient::from_env().context("failed to create Last.fm client")?;
    tracing::info!(%username, "Probing Last.fm user methods");

    probe(&client, &username).await?;

    client.close();
    Ok(())
}

async fn probe(client: &LastfmClient, username: &str) -> anyhow::Result<()> {
    let user = client.user();

    let today = Utc::now().date_naive();
    let week = ChartRange::between(
        today.checked_sub_days(Days::new(7)).unwrap_or(today),
        today,
    );

    report("user.getinfo", user.get_info(username).await.map(Some))?;
    report(
        "user.getrecenttracks",
        user.get_recent_tracks(username, RecentTracksOptions::default())
            .await,
    )?;
    report(
        "user.gettopartists",
        user.get_top_artists(username, TopOptions::default()).await,
    )?;
    report(
        "user.gettopalbums",
        user.get_top_albums(username, TopOptions::default()).await,
    )?;
    report(
        "user.gettoptracks",
        user.get_top_tracks(username, TopOptions::default()).await,
    )?;
    report(
        "user.gettoptags",
        user.get_top_tags(username, TagOptions::default()).await,
    )?;
    report(
        "user.getweeklyartistchart",
        user.get_weekly_artist_chart(username, week).await,
    )?;
    report(
        "user.getweeklyalbumchart",
        user.get_weekly_album_chart(username, week).await,
    )?;
    report(
        "user.getweeklytrackchart",
        user.get_weekly_track_chart(username, week).await,
    )?;

    Ok(())
}

/// Log a one-line summary of an operation's result
fn report<T: Into<Listing>>(method: &str, result: LastfmResult<Option<T>>) -> anyhow::Result<()> {
    match result.with_context(|| format!("{} failed", method))? {
        Some(listing) => {
            let listing: Listing = listing.into();
            tracing::info!(
                method,
                kind = listing.kind(),
                count = listing.len(),
                total = listing.total(),
                "Received result"
            );
        }
        None => tracing::info!(method, "No result"),
    }
    Ok(())
}
