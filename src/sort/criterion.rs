//! Sort criteria for playlist songs

use super::collation::locale_cmp;
use crate::error::CatalogError;
use crate::model::Song;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field a playlist's songs can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    Title,
    Artist,
    Duration,
}

impl SortCriterion {
    /// Every criterion, in the order they are listed to users
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::Title,
        SortCriterion::Artist,
        SortCriterion::Duration,
    ];

    const NAMES: &'static [&'static str] = &["title", "artist", "duration"];

    /// Names accepted by `from_str`
    pub fn allowed() -> &'static [&'static str] {
        Self::NAMES
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::Title => "title",
            SortCriterion::Artist => "artist",
            SortCriterion::Duration => "duration",
        }
    }

    /// Ascending comparison of two songs on this field
    pub fn compare(&self, a: &Song, b: &Song) -> Ordering {
        match self {
            SortCriterion::Title => locale_cmp(&a.title, &b.title),
            SortCriterion::Artist => locale_cmp(&a.artist, &b.artist),
            SortCriterion::Duration => a.duration.cmp(&b.duration),
        }
    }

    /// Stable ascending sort; equal keys keep their relative order
    pub fn sort(&self, songs: &mut [Song]) {
        songs.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for SortCriterion {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidCriterion {
                value: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
