use super::{NewSong, Playlist, Song};
use crate::error::{CatalogError, Result};
use crate::sort::SortCriterion;

/// In-memory catalog of playlists
///
/// Playlists are looked up by name with a linear scan, first match wins.
/// Every fallible operation finishes its lookups and validation before it
/// mutates anything, so an error leaves the catalog as it was.
///
/// The catalog is not synchronized. Hosts sharing one between threads
/// must put it behind their own lock.
#[derive(Debug, Default)]
pub struct Catalog {
    playlists: Vec<Playlist>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            playlists: Vec::new(),
        }
    }

    /// Append a new empty playlist
    ///
    /// Names are not checked for uniqueness; a duplicate name adds a second
    /// playlist that lookups will never reach until the first is removed.
    pub fn create_playlist(&mut self, name: impl Into<String>) {
        let playlist = Playlist::new(name.into());
        log::debug!("Creating playlist '{}'", playlist.name);
        self.playlists.push(playlist);
    }

    /// Independent copy of every playlist and its songs, in creation order
    pub fn get_all_playlists(&self) -> Vec<Playlist> {
        self.playlists.clone()
    }

    /// Remove every playlist with this name; missing names are ignored
    pub fn remove_playlist(&mut self, name: &str) {
        let before = self.playlists.len();
        self.playlists.retain(|p| p.name != name);
        log::debug!(
            "Removed {} playlist(s) named '{}'",
            before - self.playlists.len(),
            name
        );
    }

    /// Append a copy of `song` to the named playlist
    pub fn add_song_to_playlist(&mut self, playlist_name: &str, song: &NewSong) -> Result<()> {
        let playlist = self.playlist_mut(playlist_name)?;
        let song = Song::from(song);

        log::debug!("Adding '{}' to playlist '{}'", song.title, playlist.name);
        playlist.songs.push(song);
        Ok(())
    }

    /// Remove every song titled `title` from the named playlist
    pub fn remove_song_from_playlist(&mut self, playlist_name: &str, title: &str) -> Result<()> {
        let playlist = self.playlist_mut(playlist_name)?;
        if playlist.find_song(title).is_none() {
            return Err(song_not_found(playlist_name, title));
        }

        let before = playlist.len();
        playlist.songs.retain(|s| s.title != title);
        log::debug!(
            "Removed {} song(s) titled '{}' from playlist '{}'",
            before - playlist.len(),
            title,
            playlist_name
        );
        Ok(())
    }

    /// Flip the favorite flag of the first song titled `title`
    pub fn favorite_song(&mut self, playlist_name: &str, title: &str) -> Result<()> {
        let song = self
            .playlist_mut(playlist_name)?
            .find_song_mut(title)
            .ok_or_else(|| song_not_found(playlist_name, title))?;

        song.favorite = !song.favorite;
        log::debug!(
            "Song '{}' in playlist '{}' favorite: {}",
            title,
            playlist_name,
            song.favorite
        );
        Ok(())
    }

    /// Reorder the named playlist's songs by `criterion` (stable, ascending)
    ///
    /// `criterion` must be one of `title`, `artist` or `duration`; it is
    /// checked before the playlist is looked up.
    pub fn sort_songs(&mut self, playlist_name: &str, criterion: &str) -> Result<()> {
        let criterion: SortCriterion = criterion.parse()?;
        let playlist = self.playlist_mut(playlist_name)?;

        criterion.sort(&mut playlist.songs);
        log::debug!("Sorted playlist '{}' by {}", playlist_name, criterion);
        Ok(())
    }

    fn playlist_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.playlists
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| CatalogError::PlaylistNotFound {
                name: name.to_string(),
            })
    }
}

fn song_not_found(playlist: &str, title: &str) -> CatalogError {
    CatalogError::SongNotFound {
        playlist: playlist.to_string(),
        title: title.to_string(),
    }
}
