//! Catalog data model
//!
//! Songs live inside playlists, playlists live inside a catalog. The
//! catalog is the only way to mutate either.

mod catalog;
mod playlist;
mod song;

pub use catalog::Catalog;
pub use playlist::Playlist;
pub use song::{NewSong, Song};
