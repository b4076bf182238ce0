//! Snapshot rendering

use super::config::OutputFormat;
use crate::model::Playlist;
use anyhow::{Context, Result};
use std::fmt::Write;

/// Render a catalog snapshot for printing
pub fn render(playlists: &[Playlist], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(playlists)
            .context("Failed to serialize playlists to JSON"),
        OutputFormat::Text => render_text(playlists),
    }
}

fn render_text(playlists: &[Playlist]) -> Result<String> {
    let mut out = String::new();

    for playlist in playlists {
        writeln!(out, "{} ({} songs)", playlist.name, playlist.len())?;
        if playlist.is_empty() {
            writeln!(out, "  (empty)")?;
        }
        for song in &playlist.songs {
            let marker = if song.favorite { '*' } else { ' ' };
            writeln!(
                out,
                "  {} {} - {} [{}] {}",
                marker,
                song.artist,
                song.title,
                song.genre,
                format_duration(song.duration)
            )?;
        }
    }

    Ok(out)
}

/// Seconds as m:ss
fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewSong, Song};

    fn sample() -> Vec<Playlist> {
        let mut rock = Playlist::new("rock".to_string());
        rock.songs.push(Song::from(
            NewSong::new("Paranoid", "Black Sabbath", "Metal", 168).with_favorite(true),
        ));
        vec![rock, Playlist::new("pop".to_string())]
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(168), "2:48");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn test_render_text() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "rock (1 songs)\n  * Black Sabbath - Paranoid [Metal] 2:48\npop (0 songs)\n  (empty)\n"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: Vec<Playlist> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }
}
