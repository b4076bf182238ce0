//! Demo scenario configuration

use crate::model::NewSong;
use crate::sort::SortCriterion;

/// How the final catalog snapshot is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One block per playlist, one line per song
    #[default]
    Text,

    /// Pretty-printed JSON array of playlists
    Json,
}

/// Configuration for a demo run against a fresh catalog
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Playlists to create, in order
    pub playlists: Vec<String>,

    /// Songs added to every playlist, in order
    pub songs: Vec<NewSong>,

    /// Favorite toggles `(playlist, title)`, applied after songs are added
    pub favorites: Vec<(String, String)>,

    /// Sort steps `(playlist, criterion)`, applied last and in order
    pub sorts: Vec<(String, SortCriterion)>,

    /// Output format for the final snapshot
    pub format: OutputFormat,
}

impl DemoConfig {
    /// Default playlists: rock, pop, hardcore, techno
    pub fn default_playlists() -> Vec<String> {
        ["rock", "pop", "hardcore", "techno"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// The three sample songs every demo playlist receives
    pub fn sample_songs() -> Vec<NewSong> {
        vec![
            NewSong::new("test aac", "test dfg", "test 1", 100).with_favorite(false),
            NewSong::new("test abc", "test aaa", "test 2", 200).with_favorite(true),
            NewSong::new("test dfg", "test aab", "test 3", 40).with_favorite(true),
        ]
    }

    /// rock by duration, title, then artist; hardcore by artist
    pub fn default_sorts() -> Vec<(String, SortCriterion)> {
        vec![
            ("rock".to_string(), SortCriterion::Duration),
            ("rock".to_string(), SortCriterion::Title),
            ("rock".to_string(), SortCriterion::Artist),
            ("hardcore".to_string(), SortCriterion::Artist),
        ]
    }

    /// Replace the playlists to create
    pub fn with_playlists(mut self, playlists: Vec<String>) -> Self {
        self.playlists = playlists;
        self
    }

    /// Replace the sort steps
    pub fn with_sorts(mut self, sorts: Vec<(String, SortCriterion)>) -> Self {
        self.sorts = sorts;
        self
    }

    /// Replace the favorite toggles
    pub fn with_favorites(mut self, favorites: Vec<(String, String)>) -> Self {
        self.favorites = favorites;
        self
    }

    /// Set output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            playlists: Self::default_playlists(),
            songs: Self::sample_songs(),
            favorites: Vec::new(),
            sorts: Self::default_sorts(),
            format: OutputFormat::default(),
        }
    }
}
