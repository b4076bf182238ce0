use super::Song;
use serde::{Deserialize, Serialize};

/// Represents a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name (lookup key within a catalog)
    pub name: String,

    /// Songs in playlist order
    pub songs: Vec<Song>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            songs: Vec::new(),
        }
    }

    /// First song with the given title
    pub fn find_song(&self, title: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.title == title)
    }

    pub(crate) fn find_song_mut(&mut self, title: &str) -> Option<&mut Song> {
        self.songs.iter_mut().find(|s| s.title == title)
    }

    /// Number of songs in this playlist
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
