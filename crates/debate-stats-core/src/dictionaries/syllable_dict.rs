//! Syllable counting backed by a CMU-style pronunciation dictionary.
//!
//! Dictionary lines look like `WORD  P1 P2 P3`, where vowel phonemes carry a
//! trailing stress digit (`AH0`, `IY1`). The syllable count of a word is the
//! number of stress-marked phonemes in its first pronunciation. Words missing
//! from the dictionary fall back to [`estimate_syllables`].

use std::collections::HashMap;

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Where a syllable count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SyllableSource {
    /// Found in the pronunciation dictionary.
    Dictionary,
    /// Estimated from vowel groups.
    Heuristic,
}

/// Word → syllable count table parsed from a pronunciation dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllableDictionary {
    entries: HashMap<String, usize>,
}

impl SyllableDictionary {
    /// Parse CMU dictionary text.
    ///
    /// `;;;` lines are comments. Alternate pronunciations (`WORD(2)`) never
    /// replace the first one. Keys are stored lowercase.
    pub fn parse_cmudict(data: &str) -> Self {
        let mut entries = HashMap::new();
        for line in data.lines() {
            if line.starts_with(";;;") {
                continue;
            }
            let Some((word, phonemes)) = line.trim().split_once(char::is_whitespace) else {
                continue;
            };
            if word.ends_with(')') && word.contains('(') {
                continue;
            }
            let syllables = phonemes
                .split_whitespace()
                .filter(|p| p.ends_with(|c: char| c.is_ascii_digit()))
                .count();
            entries
                .entry(word.to_lowercase())
                .or_insert(syllables);
        }
        Self { entries }
    }

    /// Read and parse a CMU dictionary file.
    ///
    /// The official distribution is cp1252; bytes that are not valid UTF-8
    /// are replaced.
    #[tracing::instrument(fields(path = %path))]
    pub fn load(path: &Utf8Path) -> ConfigResult<Self> {
        let bytes = std::fs::read(path.as_std_path()).map_err(|e| ConfigError::ReferenceData {
            path: path.to_path_buf(),
            source: e,
        })?;
        let dict = Self::parse_cmudict(&String::from_utf8_lossy(&bytes));
        tracing::debug!(entries = dict.len(), "loaded pronunciation dictionary");
        Ok(dict)
    }

    /// Look up a word's syllable count.
    pub fn lookup(&self, word: &str) -> Option<usize> {
        self.entries.get(word.to_lowercase().as_str()).copied()
    }

    /// Count syllables, preferring the dictionary. Never returns zero.
    pub fn count(&self, word: &str) -> usize {
        self.count_with_source(word).0
    }

    /// Count syllables and report where the count came from. Never returns zero.
    pub fn count_with_source(&self, word: &str) -> (usize, SyllableSource) {
        match self.lookup(word) {
            Some(count) => (count.max(1), SyllableSource::Dictionary),
            None => (estimate_syllables(word), SyllableSource::Heuristic),
        }
    }

    /// Number of dictionary entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

/// Estimate syllables using the vowel-group heuristic with adjustments.
///
/// `y` counts as a vowel except at the start of a word. A trailing `e`,
/// `es` or `ed` whose `e` stands alone after a consonant is treated as
/// silent, except in consonant + `le`, `-ted`/`-ded`, and sibilant + `es`.
/// The result is at least 1 for any input.
pub fn estimate_syllables(word: &str) -> usize {
    let letters: Vec<u8> = word
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_lowercase())
        .collect();

    let mut syllables: usize = 0;
    let mut previous_was_vowel = false;

    // Count vowel groups
    for (i, &b) in letters.iter().enumerate() {
        let is_vowel = is_vowel(b) && !(b == b'y' && i == 0);
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if syllables > 1 && has_silent_final_e(&letters) {
        syllables -= 1;
    }

    syllables.max(1)
}

/// Whether the word ends in a silent `e`, `es` or `ed`.
fn has_silent_final_e(letters: &[u8]) -> bool {
    let (stem, suffix) = match letters {
        [stem @ .., b'e'] => (stem, None),
        [stem @ .., b'e', last @ (b's' | b'd')] => (stem, Some(*last)),
        _ => return false,
    };
    let Some(&before) = stem.last() else {
        return false;
    };
    if is_vowel(before) {
        return false;
    }
    match suffix {
        // table, little
        None => !(before == b'l' && stem.len() >= 2 && !is_vowel(stem[stem.len() - 2])),
        // wanted, needed
        Some(b'd') => !matches!(before, b't' | b'd'),
        // boxes, races, pages, wishes, watches
        _ => !matches!(before, b's' | b'z' | b'x' | b'c' | b'g')
            && !(before == b'h' && matches!(stem.iter().rev().nth(1), Some(b's' | b'c'))),
    }
}
