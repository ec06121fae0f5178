//! Abbreviations that should not end a sentence when followed by a period.

use std::sync::LazyLock;

use crate::word_lists::WordSet;

/// Built-in abbreviations, lowercase and without the final period.
pub static ABBREVIATIONS: LazyLock<WordSet> =
    LazyLock::new(|| WordSet::parse(include_str!("../../data/abbreviations.txt")));

/// Check if a word is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    ABBREVIATIONS.contains(word_lower.trim_matches('.'))
}
