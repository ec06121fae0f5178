//! Reference dictionaries for text analysis.
//!
//! Provides the pronunciation-backed syllable counter and the abbreviation
//! list used by sentence splitting.

pub mod abbreviations;
pub mod syllable_dict;

pub use syllable_dict::{SyllableDictionary, SyllableSource};
