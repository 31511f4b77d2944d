//! # seed
//!
//! Populates a Clipshelf store with a deterministic demo catalog. Every
//! write goes through `CollectionStore`, so the seeded data satisfies the
//! same invariants the UI relies on.

use std::sync::Arc;

use domains::{Admin, AdminRole, Collection, Community, Playlist, ProfileDetails, Report, Video};
use services::CollectionStore;
use storage_adapters::JsonFileStore;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = configs::StoreConfig::load()?;
    let path = config.store_path();
    tracing::info!(path = %path.display(), "seeding demo catalog");

    let kv = JsonFileStore::open(path)?;
    let store = CollectionStore::new(Arc::new(kv));
    seed(&store)?;

    tracing::info!("seed complete");
    Ok(())
}

fn seed(store: &CollectionStore) -> anyhow::Result<()> {
    let gaming = Community::new("Gaming Den", "lena@clipshelf.dev");
    let synthwave = Community::new("Synthwave", "marco@clipshelf.dev");
    store.upsert(Collection::Communities, gaming.clone())?;
    store.upsert(Collection::Communities, synthwave.clone())?;

    let mut speedrun = Video::new("Portal speedrun in 7 minutes", "lena", &gaming.name);
    speedrun.views = 18_400;
    let mut retrosynth = Video::new("Making a retrosynth track", "marco", &synthwave.name);
    retrosynth.views = 2_310;
    let mut short = Video::new("One-tick clutch", "lena", &gaming.name);
    short.is_short = true;
    short.views = 120_000;

    for video in [&speedrun, &retrosynth, &short] {
        store.upsert(Collection::UploadedVideos, video.clone())?;
    }
    store.upsert(Collection::History, retrosynth.clone())?;
    store.upsert(Collection::Liked, speedrun.clone())?;

    let mut favorites = Playlist::new("Friday favorites");
    favorites.videos = vec![speedrun.clone(), retrosynth.clone()];
    store.upsert(Collection::Playlists, favorites)?;

    store.add_value(Collection::Subscriptions, &gaming.name)?;
    store.add_value(Collection::Subscriptions, &synthwave.name)?;

    store.upsert(
        Collection::Admins,
        Admin::new("Priya Nair", "priya@clipshelf.dev", AdminRole::LeadAdmin),
    )?;
    store.upsert(
        Collection::Admins,
        Admin::new("Tomás Rivera", "tomas@clipshelf.dev", AdminRole::Moderator),
    )?;

    store.upsert(
        Collection::Reports,
        Report::new(short, "viewer@example.com", "Misleading title"),
    )?;

    store.put_profile(
        "lena@clipshelf.dev",
        ProfileDetails {
            mobile_number: Some("+49 170 0000000".to_string()),
            mobile_verified: true,
            country: Some("Germany".to_string()),
            native_languages: vec!["German".to_string(), "English".to_string()],
            ..ProfileDetails::default()
        },
    )?;

    Ok(())
}
