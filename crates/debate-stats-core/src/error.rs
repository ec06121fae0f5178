//! Error types for debate-stats-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A reference data file (word list, pronunciation dictionary) could not be read.
    #[error("failed to read reference data {path}: {source}")]
    ReferenceData {
        /// The resolved path that was attempted.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Pipeline stage in which a per-speaker failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Stage {
    /// Scoring Flesch Reading Ease / Flesch-Kincaid Grade.
    Readability,
}

impl Stage {
    /// Returns the stage as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Readability => "readability",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during transcript analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A transcript line does not follow the `SPEAKER: text` grammar.
    #[error("malformed transcript at line {line}: {reason}")]
    MalformedTranscript {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The transcript has no speaker lines at all.
    #[error("transcript contains no speaker lines")]
    EmptyTranscript,

    /// Readability formulas are undefined without words and sentences.
    #[error("cannot score readability of {words} words in {sentences} sentences")]
    DegenerateInput {
        /// Number of words counted.
        words: usize,
        /// Number of sentences counted.
        sentences: usize,
    },

    /// A requested speaker does not appear in the transcript.
    #[error("unknown speaker: {name}. Speakers: {available}")]
    UnknownSpeaker {
        /// The speaker name that was requested.
        name: String,
        /// Comma-separated list of speakers in the transcript.
        available: String,
    },

    /// Analysis of a single speaker failed.
    #[error("{stage} analysis failed for {speaker}: {source}")]
    Speaker {
        /// The speaker being analysed.
        speaker: String,
        /// The pipeline stage that failed.
        stage: Stage,
        /// The underlying failure.
        source: Box<AnalysisError>,
    },
}

impl AnalysisError {
    /// Attach speaker and stage context to an error.
    pub fn for_speaker(self, speaker: impl Into<String>, stage: Stage) -> Self {
        Self::Speaker {
            speaker: speaker.into(),
            stage,
            source: Box::new(self),
        }
    }
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
