//! Word frequency tables and top-N rankings.
//!
//! Rankings sort by count, highest first. Equal counts keep the order in
//! which the words first appeared in the speaker's text, so a ranking is
//! reproducible and reads like the transcript.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::word_lists::{WordFilter, WordLists};

/// Default length of a ranked list.
pub const DEFAULT_TOP_N: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Occurrence {
    count: usize,
    first_seen: usize,
}

/// Token → count mapping for one speaker.
///
/// The sum of all counts always equals [`FrequencyTable::total`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    words: HashMap<String, Occurrence>,
    total: usize,
}

impl FrequencyTable {
    /// Count tokens, skipping those the filter excludes.
    ///
    /// First-appearance positions refer to the unfiltered token stream.
    pub fn from_tokens<I>(tokens: I, lists: &WordLists, filter: WordFilter) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut table = Self::default();
        for (position, token) in tokens.into_iter().enumerate() {
            if !filter.excludes(lists, &token) {
                table.insert(token, position);
            }
        }
        table
    }

    fn insert(&mut self, token: String, position: usize) {
        self.total += 1;
        self.words
            .entry(token)
            .and_modify(|o| o.count += 1)
            .or_insert(Occurrence {
                count: 1,
                first_seen: position,
            });
    }

    /// A copy of this table without the tokens `filter` excludes.
    #[must_use]
    pub fn filtered(&self, lists: &WordLists, filter: WordFilter) -> Self {
        if filter.is_none() {
            return self.clone();
        }
        let words: HashMap<String, Occurrence> = self
            .words
            .iter()
            .filter(|(word, _)| !filter.excludes(lists, word))
            .map(|(word, occ)| (word.clone(), *occ))
            .collect();
        let total = words.values().map(|o| o.count).sum();
        Self { words, total }
    }

    /// How often `word` occurs (0 if absent).
    pub fn count(&self, word: &str) -> usize {
        self.words.get(word).map_or(0, |o| o.count)
    }

    /// Total number of counted tokens.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens.
    pub fn unique(&self) -> usize {
        self.words.len()
    }

    /// Iterate over `(word, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.words.iter().map(|(w, o)| (w.as_str(), o.count))
    }

    /// The `n` most frequent words.
    pub fn top(&self, n: usize) -> RankedList {
        let mut ranked: Vec<(&String, &Occurrence)> = self.words.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        ranked.truncate(n);

        let words = ranked
            .into_iter()
            .map(|(word, occ)| RankedWord {
                word: word.clone(),
                count: occ.count,
                share: share(occ.count, self.total),
            })
            .collect();

        RankedList {
            words,
            counted_words: self.total,
        }
    }
}

/// One entry in a ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RankedWord {
    /// The normalized word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
    /// Percentage of the counted (post-filter) words.
    pub share: f64,
}

/// Words sorted by count, highest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RankedList {
    /// The ranked words.
    pub words: Vec<RankedWord>,
    /// Number of words that survived the filter.
    pub counted_words: usize,
}

impl RankedList {
    /// `(word, count)` pairs in rank order.
    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.words
            .iter()
            .map(|w| (w.word.as_str(), w.count))
            .collect()
    }
}

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(count as f64 / total as f64 * 100.0)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::{count_tokens, tokenize};
    use crate::word_lists::WordSet;

    const TEXT: &str = "I think the economy is strong. The economy is growing.";

    fn lists() -> WordLists {
        WordLists {
            stopwords: ["the", "is"].into_iter().collect(),
            pronouns: ["i"].into_iter().collect(),
        }
    }

    fn table(text: &str, filter: WordFilter) -> FrequencyTable {
        FrequencyTable::from_tokens(tokenize(text), &lists(), filter)
    }

    #[test]
    fn unfiltered_ranking_breaks_ties_by_first_appearance() {
        let top = table(TEXT, WordFilter::NONE).top(DEFAULT_TOP_N);
        assert_eq!(
            top.pairs(),
            vec![
                ("the", 2),
                ("economy", 2),
                ("is", 2),
                ("i", 1),
                ("think", 1),
                ("strong", 1),
                ("growing", 1),
            ]
        );
        assert_eq!(top.counted_words, 10);
    }

    #[test]
    fn stopword_filter_ranking() {
        let top = table(TEXT, WordFilter::STOPWORDS).top(DEFAULT_TOP_N);
        assert_eq!(
            top.pairs(),
            vec![
                ("economy", 2),
                ("i", 1),
                ("think", 1),
                ("strong", 1),
                ("growing", 1),
            ]
        );
        assert_eq!(top.counted_words, 6);
    }

    #[test]
    fn pronoun_filter_ranking() {
        let top = table(TEXT, WordFilter::STOPWORDS_AND_PRONOUNS).top(DEFAULT_TOP_N);
        assert_eq!(
            top.pairs(),
            vec![("economy", 2), ("think", 1), ("strong", 1), ("growing", 1)]
        );
    }

    #[test]
    fn share_uses_filtered_total() {
        let top = table(TEXT, WordFilter::STOPWORDS_AND_PRONOUNS).top(DEFAULT_TOP_N);
        assert_eq!(top.counted_words, 5);
        assert!((top.words[0].share - 40.0).abs() < f64::EPSILON);
        assert!((top.words[1].share - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn counts_sum_to_raw_total() {
        let text = "We will, we will rock you. Don't stop -- won't stop!";
        let table = table(text, WordFilter::NONE);
        let sum: usize = table.iter().map(|(_, c)| c).sum();
        assert_eq!(sum, table.total());
        assert_eq!(table.total(), count_tokens(text));
    }

    #[test]
    fn filtered_matches_filtering_at_build_time() {
        let full = table(TEXT, WordFilter::NONE);
        let derived = full.filtered(&lists(), WordFilter::STOPWORDS);
        assert_eq!(derived, table(TEXT, WordFilter::STOPWORDS));
        assert_eq!(derived.top(20), table(TEXT, WordFilter::STOPWORDS).top(20));
    }

    #[test]
    fn filtering_is_idempotent() {
        let lists = lists();
        let once = table(TEXT, WordFilter::NONE).filtered(&lists, WordFilter::STOPWORDS_AND_PRONOUNS);
        let twice = once.filtered(&lists, WordFilter::STOPWORDS_AND_PRONOUNS);
        assert_eq!(once, twice);
        assert_eq!(once.top(20), twice.top(20));
    }

    #[test]
    fn top_is_bounded_and_sorted() {
        let text: String = (0..50)
            .map(|i| format!("word{i} ").repeat(i % 7 + 1))
            .collect();
        let top = table(&text, WordFilter::NONE).top(DEFAULT_TOP_N);
        assert_eq!(top.words.len(), DEFAULT_TOP_N);
        assert!(top.words.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn empty_table() {
        let table = table("", WordFilter::STOPWORDS);
        assert_eq!(table.total(), 0);
        assert_eq!(table.unique(), 0);
        assert!(table.top(20).words.is_empty());
    }

    #[test]
    fn count_of_absent_word_is_zero() {
        let table = FrequencyTable::from_tokens(
            tokenize("tax cuts"),
            &WordLists {
                stopwords: WordSet::default(),
                pronouns: WordSet::default(),
            },
            WordFilter::STOPWORDS,
        );
        assert_eq!(table.count("tax"), 1);
        assert_eq!(table.count("tariffs"), 0);
    }
}
