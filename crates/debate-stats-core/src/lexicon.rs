//! Read-only reference data for a run.
//!
//! A [`Lexicon`] bundles the word lists and the pronunciation dictionary.
//! It is built once from configuration and passed by shared reference to
//! every analysis step.

use camino::Utf8Path;

use crate::config::Config;
use crate::dictionaries::SyllableDictionary;
use crate::error::ConfigResult;
use crate::word_lists::{BUILTIN_PRONOUNS, BUILTIN_STOPWORDS, WordLists, WordSet};

/// Stopwords, pronouns and syllable counts.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Word lists used by the filters.
    pub words: WordLists,
    /// Pronunciation-backed syllable counts.
    pub syllables: SyllableDictionary,
}

impl Lexicon {
    /// Build the lexicon a configuration describes.
    ///
    /// Word list files replace the built-in lists; `extra_*` words are added
    /// afterwards. Without a pronunciation dictionary every syllable count
    /// comes from the heuristic.
    #[tracing::instrument(skip_all)]
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        let mut stopwords = load_or_builtin(config.stopwords_file.as_deref(), &BUILTIN_STOPWORDS)?;
        stopwords.extend(&config.extra_stopwords);

        let mut pronouns = load_or_builtin(config.pronouns_file.as_deref(), &BUILTIN_PRONOUNS)?;
        pronouns.extend(&config.extra_pronouns);

        let syllables = match config.pronunciation_dict.as_deref() {
            Some(path) => SyllableDictionary::load(path)?,
            None => SyllableDictionary::default(),
        };

        tracing::debug!(
            stopwords = stopwords.len(),
            pronouns = pronouns.len(),
            pronunciations = syllables.len(),
            "lexicon ready"
        );

        Ok(Self {
            words: WordLists {
                stopwords,
                pronouns,
            },
            syllables,
        })
    }
}

fn load_or_builtin(path: Option<&Utf8Path>, builtin: &WordSet) -> ConfigResult<WordSet> {
    path.map_or_else(|| Ok(builtin.clone()), WordSet::load)
}
