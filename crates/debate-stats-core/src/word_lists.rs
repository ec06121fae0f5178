//! Stopword and pronoun lists, and the filters built on them.
//!
//! The lists are data, not code: the built-in sets are parsed from the
//! newline-separated files under `data/`, and configuration can replace or
//! extend them without touching any filtering logic.

use std::collections::HashSet;
use std::sync::LazyLock;

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Built-in stopwords (articles, auxiliaries, first-person singular pronouns).
pub static BUILTIN_STOPWORDS: LazyLock<WordSet> =
    LazyLock::new(|| WordSet::parse(include_str!("../data/stopwords.txt")));

/// Built-in personal pronouns (second/third person and plural).
pub static BUILTIN_PRONOUNS: LazyLock<WordSet> =
    LazyLock::new(|| WordSet::parse(include_str!("../data/pronouns.txt")));

/// A set of normalized (lowercase) tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Parse a word list: one word per line, `#` starts a comment line.
    pub fn parse(data: &str) -> Self {
        data.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Read and parse a word list file.
    pub fn load(path: &Utf8Path) -> ConfigResult<Self> {
        let data =
            std::fs::read_to_string(path.as_std_path()).map_err(|e| ConfigError::ReferenceData {
                path: path.to_path_buf(),
                source: e,
            })?;
        let set = Self::parse(&data);
        tracing::debug!(%path, words = set.len(), "loaded word list");
        Ok(set)
    }

    /// Whether the set contains `word` (already normalized).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Add more words to the set.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

/// How a token is classified for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    /// Neither a stopword nor a pronoun.
    Ordinary,
    /// In the stopword set.
    Stopword,
    /// In the pronoun set (and not a stopword).
    Pronoun,
}

/// The stopword and pronoun sets used for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    /// Low-information words.
    pub stopwords: WordSet,
    /// Personal pronouns tracked separately from stopwords.
    pub pronouns: WordSet,
}

impl Default for WordLists {
    fn default() -> Self {
        Self {
            stopwords: BUILTIN_STOPWORDS.clone(),
            pronouns: BUILTIN_PRONOUNS.clone(),
        }
    }
}

impl WordLists {
    /// Classify a token. Stopword membership wins over pronoun membership.
    pub fn classify(&self, token: &str) -> WordClass {
        if self.stopwords.contains(token) {
            WordClass::Stopword
        } else if self.pronouns.contains(token) {
            WordClass::Pronoun
        } else {
            WordClass::Ordinary
        }
    }
}

/// Which word classes to exclude from a frequency table.
///
/// Each switch checks its own set, so a token listed as both a stopword and a
/// pronoun is removed by either switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordFilter {
    /// Drop tokens in the stopword set.
    pub exclude_stopwords: bool,
    /// Drop tokens in the pronoun set.
    pub exclude_pronouns: bool,
}

impl WordFilter {
    /// Keep every token.
    pub const NONE: Self = Self {
        exclude_stopwords: false,
        exclude_pronouns: false,
    };

    /// Drop stopwords.
    pub const STOPWORDS: Self = Self {
        exclude_stopwords: true,
        exclude_pronouns: false,
    };

    /// Drop stopwords and pronouns.
    pub const STOPWORDS_AND_PRONOUNS: Self = Self {
        exclude_stopwords: true,
        exclude_pronouns: true,
    };

    /// Whether this filter removes `token`.
    pub fn excludes(&self, lists: &WordLists, token: &str) -> bool {
        (self.exclude_stopwords && lists.stopwords.contains(token))
            || (self.exclude_pronouns && lists.pronouns.contains(token))
    }

    /// Whether this filter keeps every token.
    pub const fn is_none(&self) -> bool {
        !self.exclude_stopwords && !self.exclude_pronouns
    }
}

/// Named filter presets, as selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum FilterMode {
    /// Count every word.
    None,
    /// Skip stopwords.
    #[default]
    Stopwords,
    /// Skip stopwords and pronouns.
    Pronouns,
}

impl From<FilterMode> for WordFilter {
    fn from(mode: FilterMode) -> Self {
        match mode {
            FilterMode::None => Self::NONE,
            FilterMode::Stopwords => Self::STOPWORDS,
            FilterMode::Pronouns => Self::STOPWORDS_AND_PRONOUNS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists() -> WordLists {
        WordLists {
            stopwords: ["the", "is", "you"].into_iter().collect(),
            pronouns: ["i", "you", "they"].into_iter().collect(),
        }
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let set = WordSet::parse("# header\nthe\n\n  is  \n# trailing\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("the"));
        assert!(set.contains("is"));
        assert!(!set.contains("# header"));
    }

    #[test]
    fn extend_normalizes() {
        let mut set = WordSet::default();
        set.extend(["  Folks ", "BELIEVE"]);
        assert!(set.contains("folks"));
        assert!(set.contains("believe"));
    }

    #[test]
    fn builtin_lists_loaded() {
        assert!(BUILTIN_STOPWORDS.contains("the"));
        assert!(BUILTIN_STOPWORDS.contains("i"));
        assert!(BUILTIN_STOPWORDS.contains("i'm"));
        assert!(BUILTIN_PRONOUNS.contains("they"));
        assert!(BUILTIN_PRONOUNS.contains("that's"));
        assert!(!BUILTIN_PRONOUNS.contains("i"));
        assert!(!BUILTIN_STOPWORDS.contains("economy"));
    }

    #[test]
    fn classify_prefers_stopword() {
        let lists = lists();
        assert_eq!(lists.classify("the"), WordClass::Stopword);
        assert_eq!(lists.classify("you"), WordClass::Stopword);
        assert_eq!(lists.classify("they"), WordClass::Pronoun);
        assert_eq!(lists.classify("economy"), WordClass::Ordinary);
    }

    #[test]
    fn filter_switches_check_their_own_set() {
        let lists = lists();
        let pronouns_only = WordFilter {
            exclude_stopwords: false,
            exclude_pronouns: true,
        };
        assert!(pronouns_only.excludes(&lists, "you"));
        assert!(!pronouns_only.excludes(&lists, "the"));
        assert!(WordFilter::STOPWORDS.excludes(&lists, "you"));
        assert!(!WordFilter::STOPWORDS.excludes(&lists, "i"));
        assert!(WordFilter::STOPWORDS_AND_PRONOUNS.excludes(&lists, "i"));
        assert!(!WordFilter::NONE.excludes(&lists, "the"));
    }

    #[test]
    fn filter_mode_presets() {
        assert_eq!(WordFilter::from(FilterMode::None), WordFilter::NONE);
        assert_eq!(WordFilter::from(FilterMode::Stopwords), WordFilter::STOPWORDS);
        assert_eq!(
            WordFilter::from(FilterMode::Pronouns),
            WordFilter::STOPWORDS_AND_PRONOUNS
        );
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = WordSet::load(Utf8Path::new("/nonexistent/stopwords.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/stopwords.txt"));
    }
}
