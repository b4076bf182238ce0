//! Locale-aware string ordering
//!
//! Titles and artists are compared with the root-locale collator at its
//! default (tertiary) strength: letters first, then accents, then case.
//! Strings equal at that strength compare equal, so a stable sort keeps
//! them in their insertion order.

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            log::warn!("Root collator unavailable, using code point order: {}", e);
            None
        }
    }
}

/// Compare two strings for ascending display order
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
