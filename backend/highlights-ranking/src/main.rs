use anyhow::Context;
use entity_models::{EntitySnapshot, InMemoryEntityStore};
use highlights_ranking::{Config, FeedRanker, HighlightsService};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "usage: highlights-ranking <snapshot.json> [viewer-email]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, the feed goes to stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().context("Failed to load config")?;

    let mut args = std::env::args().skip(1);
    let snapshot_path = args.next().context(USAGE)?;
    let viewer_email = args.next();

    let snapshot = EntitySnapshot::load(&snapshot_path)
        .with_context(|| format!("Failed to load snapshot {}", snapshot_path))?;

    info!(
        service = %config.service_name,
        snapshot = %snapshot_path,
        posts = snapshot.posts.len(),
        users = snapshot.users.len(),
        "Ranking highlights from snapshot"
    );

    let service = HighlightsService::new(
        InMemoryEntityStore::new(snapshot),
        FeedRanker::new(&config.ranking),
    );

    let feed = match viewer_email {
        Some(email) => service.highlights_for(&email).await?,
        None => service.highlights_for_me().await?,
    };

    println!("{}", serde_json::to_string_pretty(&feed)?);

    Ok(())
}
