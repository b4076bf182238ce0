//! Music Catalog - in-memory playlists and songs
//!
//! This library keeps an ordered set of named playlists in memory and
//! supports adding, removing, favoriting and sorting their songs.

pub mod driver;
pub mod error;
pub mod model;
pub mod sort;

pub use error::{CatalogError, EntityKind, Result};
pub use model::{Catalog, NewSong, Playlist, Song};
pub use sort::SortCriterion;
