//! Playlist song ordering

mod collation;
mod criterion;

pub use collation::locale_cmp;
pub use criterion::SortCriterion;
