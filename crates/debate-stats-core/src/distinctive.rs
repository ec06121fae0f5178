//! Distinctive word ranking between two speakers.
//!
//! For every word either speaker used, the differential is
//! `count_a - count_b` (a missing word counts as zero). Each direction keeps
//! the words with a positive differential, largest first, ties broken
//! alphabetically.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;

/// A word and how many more times one speaker used it than the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordDelta {
    /// The normalized word.
    pub word: String,
    /// Count difference from the perspective of the list's speaker.
    pub delta: i64,
}

/// Words each speaker used distinctively more than the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Distinctiveness {
    /// Words speaker A used more than speaker B (`delta = a - b`).
    pub more_in_a: Vec<WordDelta>,
    /// Words speaker B used more than speaker A (`delta = b - a`).
    pub more_in_b: Vec<WordDelta>,
}

/// Signed differential `a - b` for every word in either table, sorted by word.
pub fn differentials(a: &FrequencyTable, b: &FrequencyTable) -> Vec<WordDelta> {
    let words: BTreeSet<&str> = a.iter().chain(b.iter()).map(|(w, _)| w).collect();
    words
        .into_iter()
        .map(|word| WordDelta {
            word: word.to_string(),
            delta: signed(a.count(word)) - signed(b.count(word)),
        })
        .collect()
}

/// Rank the most distinctive words in each direction, at most `n` per side.
#[tracing::instrument(skip_all, fields(n))]
pub fn compare(a: &FrequencyTable, b: &FrequencyTable, n: usize) -> Distinctiveness {
    let all = differentials(a, b);

    let mut more_in_a: Vec<WordDelta> = all.iter().filter(|d| d.delta > 0).cloned().collect();
    let mut more_in_b: Vec<WordDelta> = all
        .into_iter()
        .filter(|d| d.delta < 0)
        .map(|d| WordDelta {
            word: d.word,
            delta: -d.delta,
        })
        .collect();

    rank(&mut more_in_a, n);
    rank(&mut more_in_b, n);

    tracing::debug!(
        more_in_a = more_in_a.len(),
        more_in_b = more_in_b.len(),
        "ranked distinctive words"
    );

    Distinctiveness {
        more_in_a,
        more_in_b,
    }
}

fn rank(deltas: &mut Vec<WordDelta>, n: usize) {
    deltas.sort_by(|x, y| y.delta.cmp(&x.delta).then_with(|| x.word.cmp(&y.word)));
    deltas.truncate(n);
}

fn signed(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
