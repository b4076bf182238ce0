use serde::{Deserialize, Serialize};

/// A song stored in a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title (lookup key within a playlist)
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Genre
    pub genre: String,

    /// Duration in seconds
    pub duration: u32,

    /// Whether the song is marked as a favorite
    pub favorite: bool,
}

/// Caller-supplied song data for `Catalog::add_song_to_playlist`
///
/// Unknown fields are ignored when deserializing, and a missing
/// `favorite` becomes `false` once the song is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub duration: u32,
    #[serde(default)]
    pub favorite: Option<bool>,
}

impl NewSong {
    /// Create song input without a favorite flag
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
        duration: u32,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
            duration,
            favorite: None,
        }
    }

    /// Set the favorite flag
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = Some(favorite);
        self
    }
}

impl From<&NewSong> for Song {
    fn from(input: &NewSong) -> Self {
        Self {
            title: input.title.clone(),
            artist: input.artist.clone(),
            genre: input.genre.clone(),
            duration: input.duration,
            favorite: input.favorite.unwrap_or(false),
        }
    }
}

impl From<NewSong> for Song {
    fn from(input: NewSong) -> Self {
        Self {
            title: input.title,
            artist: input.artist,
            genre: input.genre,
            duration: input.duration,
            favorite: input.favorite.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_defaults_to_false() {
        let song = Song::from(NewSong::new("Intro", "The xx", "Indie", 128));
        assert!(!song.favorite);
        assert_eq!(song.title, "Intro");
        assert_eq!(song.duration, 128);
    }

    #[test]
    fn test_explicit_favorite_is_kept() {
        let song = Song::from(NewSong::new("Intro", "The xx", "Indie", 128).with_favorite(true));
        assert!(song.favorite);
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{
            "title": "Teardrop",
            "artist": "Massive Attack",
            "genre": "Trip hop",
            "duration": 330,
            "rating": 5,
            "album": "Mezzanine"
        }"#;

        let input: NewSong = serde_json::from_str(json).unwrap();
        assert_eq!(input.favorite, None);

        let song = Song::from(input);
        assert_eq!(song.artist, "Massive Attack");
        assert!(!song.favorite);
    }
}
