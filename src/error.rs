//! Catalog error types

use thiserror::Error;

/// Kind of catalog entity a lookup failed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Playlist,
    Song,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Playlist \"{name}\" not found")]
    PlaylistNotFound { name: String },

    #[error("Song \"{title}\" not found in {playlist}")]
    SongNotFound { playlist: String, title: String },

    #[error("Invalid criterion: {value}. Must be one of: {}", .allowed.join(", "))]
    InvalidCriterion {
        value: String,
        allowed: &'static [&'static str],
    },
}

impl CatalogError {
    /// True for any missing playlist or song
    pub fn is_not_found(&self) -> bool {
        self.entity().is_some()
    }

    /// True when an argument was outside its allowed set
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::InvalidCriterion { .. })
    }

    /// Which entity was missing, if this is a not-found error
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            CatalogError::PlaylistNotFound { .. } => Some(EntityKind::Playlist),
            CatalogError::SongNotFound { .. } => Some(EntityKind::Song),
            CatalogError::InvalidCriterion { .. } => None,
        }
    }

    /// The key the failing lookup or validation was made with
    pub fn key(&self) -> &str {
        match self {
            CatalogError::PlaylistNotFound { name } => name,
            CatalogError::SongNotFound { title, .. } => title,
            CatalogError::InvalidCriterion { value, .. } => value,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = CatalogError::PlaylistNotFound {
            name: "ghost".to_string(),
        };
        assert_eq!(err.to_string(), "Playlist \"ghost\" not found");
        assert!(err.is_not_found());
        assert_eq!(err.entity(), Some(EntityKind::Playlist));
        assert_eq!(err.key(), "ghost");

        let err = CatalogError::SongNotFound {
            playlist: "rock".to_string(),
            title: "Intro".to_string(),
        };
        assert_eq!(err.to_string(), "Song \"Intro\" not found in rock");
        assert_eq!(err.entity(), Some(EntityKind::Song));
        assert_eq!(err.key(), "Intro");
    }

    #[test]
    fn test_validation_message_lists_allowed() {
        let err = CatalogError::InvalidCriterion {
            value: "bogus".to_string(),
            allowed: &["title", "artist", "duration"],
        };
        assert_eq!(
            err.to_string(),
            "Invalid criterion: bogus. Must be one of: title, artist, duration"
        );
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }
}
