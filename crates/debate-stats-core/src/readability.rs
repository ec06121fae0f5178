//! Readability scoring.
//!
//! - Flesch Reading Ease: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//! - Flesch-Kincaid Grade Level: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//!
//! Higher reading ease = more readable; lower grade = more readable.
//!
//! Word and syllable counts come from the tokenizer and the pronunciation
//! dictionary (via [`SyllableDictionary`]); sentence counts come from
//! [`text::count_sentences`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::SyllableDictionary;
use crate::error::{AnalysisError, AnalysisResult};
use crate::text;
use crate::tokenize::tokenize;

/// Sentence, word and syllable counts for a body of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextCounts {
    /// Number of sentences.
    pub sentences: usize,
    /// Number of words.
    pub words: usize,
    /// Total syllable count.
    pub syllables: usize,
}

impl TextCounts {
    /// Count sentences, words and syllables in `text`.
    pub fn measure(text: &str, syllables: &SyllableDictionary) -> Self {
        let (words, syllable_total) = tokenize(text)
            .fold((0, 0), |(w, s), token| (w + 1, s + syllables.count(&token)));
        Self {
            sentences: text::count_sentences(text),
            words,
            syllables: syllable_total,
        }
    }
}

impl std::ops::Add for TextCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            sentences: self.sentences + rhs.sentences,
            words: self.words + rhs.words,
            syllables: self.syllables + rhs.syllables,
        }
    }
}

impl std::iter::Sum for TextCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, c| acc + c)
    }
}

/// Result of readability scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityScore {
    /// Flesch Reading Ease score.
    pub reading_ease: f64,
    /// Flesch-Kincaid Grade Level score.
    pub grade_level: f64,
    /// The counts the scores were computed from.
    #[serde(flatten)]
    pub counts: TextCounts,
}

/// Score readability from precomputed counts.
///
/// Returns [`AnalysisError::DegenerateInput`] when there are no words or no
/// sentences; the formulas are undefined there.
pub fn score(counts: TextCounts) -> AnalysisResult<ReadabilityScore> {
    if counts.words == 0 || counts.sentences == 0 {
        return Err(AnalysisError::DegenerateInput {
            words: counts.words,
            sentences: counts.sentences,
        });
    }

    let words_per_sentence = counts.words as f64 / counts.sentences as f64;
    let syllables_per_word = counts.syllables as f64 / counts.words as f64;
    let reading_ease = 1.015f64.mul_add(-words_per_sentence, 206.835) - 84.6 * syllables_per_word;
    let grade_level = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;

    Ok(ReadabilityScore {
        reading_ease,
        grade_level,
        counts,
    })
}

/// Measure and score a text in one step.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_readability(
    text: &str,
    syllables: &SyllableDictionary,
) -> AnalysisResult<ReadabilityScore> {
    score(TextCounts::measure(text, syllables))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn one_long_sentence() {
        let result = score(TextCounts {
            sentences: 1,
            words: 100,
            syllables: 150,
        })
        .unwrap();
        assert!(close(result.reading_ease, -21.565));
        assert!(close(result.grade_level, 39.0 + 17.7 - 15.59));
    }

    #[test]
    fn simple_text_is_readable() {
        let result =
            check_readability("The cat sat on the mat. The dog ran fast.", &SyllableDictionary::default())
                .unwrap();
        assert_eq!(result.counts.sentences, 2);
        assert_eq!(result.counts.words, 10);
        assert_eq!(result.counts.syllables, 10);
        assert!(result.reading_ease > 90.0);
        assert!(result.grade_level < 2.0);
    }

    #[test]
    fn zero_words_is_degenerate() {
        let err = score(TextCounts {
            sentences: 3,
            words: 0,
            syllables: 0,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::DegenerateInput {
                words: 0,
                sentences: 3
            }
        ));
    }

    #[test]
    fn zero_sentences_is_degenerate() {
        let err = score(TextCounts {
            sentences: 0,
            words: 2,
            syllables: 2,
        })
        .unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateInput { sentences: 0, .. }));
    }

    #[test]
    fn empty_text_is_degenerate() {
        assert!(check_readability("", &SyllableDictionary::default()).is_err());
        assert!(check_readability("...", &SyllableDictionary::default()).is_err());
    }

    #[test]
    fn dictionary_backed_syllables() {
        // "fire" is two syllables in the dictionary but looks like "hire" + silent e.
        let dict = SyllableDictionary::parse_cmudict("FIRE  F AY1 ER0\n");
        let with_dict = TextCounts::measure("I love fire.", &dict);
        let without = TextCounts::measure("I love fire.", &SyllableDictionary::default());
        assert_eq!(with_dict.syllables, 4);
        assert_eq!(without.syllables, 3);
    }

    #[test]
    fn counts_add_up() {
        let dict = SyllableDictionary::default();
        let parts = ["First point here.", "Second point. Third point."];
        let summed: TextCounts = parts.iter().map(|p| TextCounts::measure(p, &dict)).sum();
        assert_eq!(summed.sentences, 3);
        assert_eq!(summed.words, 7);
    }
}
