//! Runs a demo scenario through the catalog's public operations

use super::config::DemoConfig;
use crate::model::{Catalog, Playlist};
use anyhow::{Context, Result};

/// Build a fresh catalog from `config` and return its final snapshot
pub fn run_scenario(config: &DemoConfig) -> Result<Vec<Playlist>> {
    let mut catalog = Catalog::new();

    log::info!("Creating {} playlist(s)", config.playlists.len());
    for name in &config.playlists {
        catalog.create_playlist(name.as_str());
    }

    log::info!("Adding {} song(s) to each playlist", config.songs.len());
    for name in &config.playlists {
        for song in &config.songs {
            catalog
                .add_song_to_playlist(name, song)
                .with_context(|| format!("Failed to add '{}' to '{}'", song.title, name))?;
        }
    }

    for (playlist, title) in &config.favorites {
        log::info!("Toggling favorite: {} / {}", playlist, title);
        catalog
            .favorite_song(playlist, title)
            .with_context(|| format!("Failed to toggle favorite '{}' in '{}'", title, playlist))?;
    }

    for (playlist, criterion) in &config.sorts {
        log::info!("Sorting '{}' by {}", playlist, criterion);
        catalog
            .sort_songs(playlist, criterion.as_str())
            .with_context(|| format!("Failed to sort '{}' by {}", playlist, criterion))?;
    }

    Ok(catalog.get_all_playlists())
}
