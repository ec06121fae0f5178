//! Report structs for transcript analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in CLI JSON output and the published report schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::distinctive::Distinctiveness;
use crate::frequency::RankedList;
use crate::readability::ReadabilityScore;
use crate::transcript::Role;

/// Full report for one transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DebateReport {
    /// One section per analysed speaker, in transcript order.
    pub speakers: Vec<SpeakerReport>,
    /// One section per compared speaker pair.
    pub comparisons: Vec<ComparisonReport>,
}

/// Statistics for a single speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpeakerReport {
    /// Canonical speaker name.
    pub name: String,
    /// Candidate or moderator.
    pub role: Role,
    /// Every word the speaker said, before filtering.
    pub total_words: usize,
    /// Distinct words, before filtering.
    pub unique_words: usize,
    /// Most frequent words with stopwords removed.
    pub top_words: RankedList,
    /// Most frequent words with stopwords and pronouns removed.
    pub top_non_pronoun_words: RankedList,
    /// Readability scores plus the sentence, word and syllable counts.
    pub readability: ReadabilityScore,
}

/// Distinctive words between two speakers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComparisonReport {
    /// First speaker of the pair.
    pub speaker_a: String,
    /// Second speaker of the pair.
    pub speaker_b: String,
    /// Words each speaker used more than the other.
    #[serde(flatten)]
    pub distinctiveness: Distinctiveness,
}
