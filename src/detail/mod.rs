//! Lazy detail loading from PokeAPI
//!
//! Selecting a point without detail runs a short chain of requests:
//! 1. Look up the entity record by a key derived from the point's name
//! 2. Assign stats straight from that record
//! 3. Resolve the first sprite to an image URL
//! 4. Resolve the newest description and clean up its typos
//!
//! Steps 3 and 4 run concurrently once step 1 has answered. Every failure
//! collapses into one shared [`ErrorFlag`].

pub mod pipeline;
pub mod record;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use pipeline::{DetailPipeline, DetailTarget, DetailUpdate, FetchOutcome};
pub use source::{HttpJsonSource, JsonSource};

use crate::constants::pokeapi::{
    AVERAGE_SIZE_NAME, AVERAGE_SIZE_SUFFIX, DESCRIPTION_GENERATIONS, MALE_SUFFIX,
};
use record::DescriptionRef;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "detail fetch failed" signal read by the presentation layer
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct ErrorFlag(Arc<AtomicBool>);

impl ErrorFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Derive the PokeAPI lookup key from a display name
///
/// Multi-word names keep their first word plus the male suffix, since only
/// male variants have complete records. Pumpkaboo needs its size.
pub fn lookup_key(name: &str) -> String {
    let lower = name.to_lowercase();

    if let Some((first, _)) = lower.split_once(' ') {
        format!("{}{}", first, MALE_SUFFIX)
    } else if lower == AVERAGE_SIZE_NAME {
        format!("{}{}", lower, AVERAGE_SIZE_SUFFIX)
    } else {
        lower
    }
}

/// Pick the description URI from generation 5 or 6
///
/// The whole list is scanned and the last match wins, so with both present
/// the result depends on input order.
pub fn choose_description(descriptions: &[DescriptionRef]) -> Option<&str> {
    descriptions
        .iter()
        .filter(|entry| {
            entry
                .name
                .chars()
                .last()
                .is_some_and(|c| DESCRIPTION_GENERATIONS.contains(&c))
        })
        .last()
        .map(|entry| entry.resource_uri.as_str())
}

/// Fix the known typos in PokeAPI description text
///
/// Only "Pokmon" is replaced everywhere; the others at their first occurrence.
pub fn clean_description(text: &str) -> String {
    text.replacen("cant", "can't", 1)
        .replacen("isnt", "isn't", 1)
        .replacen("Pokmons", "Pokémon's", 1)
        .replace("Pokmon", "Pokémon")
        .replacen("wont", "won't", 1)
}
