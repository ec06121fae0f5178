//! Transcript analysis.
//!
//! Builds a [`DebateReport`] from a parsed transcript, orchestrated by
//! [`analyze_transcript`]. Each speaker's section depends only on that
//! speaker's utterances and the lexicon; comparisons are the only step that
//! looks at two speakers at once.
//!
//! Callers can also invoke the per-speaker steps individually.

pub mod reports;

pub use reports::{ComparisonReport, DebateReport, SpeakerReport};

use crate::distinctive;
use crate::error::{AnalysisResult, Stage};
use crate::frequency::{DEFAULT_TOP_N, FrequencyTable, RankedList};
use crate::lexicon::Lexicon;
use crate::readability::{self, ReadabilityScore, TextCounts};
use crate::tokenize::tokenize;
use crate::transcript::{Speaker, Transcript};
use crate::word_lists::WordFilter;

/// What to include in a [`DebateReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Length of every ranked list.
    pub top_n: usize,
    /// Speaker pairs to compare. `None` compares every pair of candidates.
    pub pairs: Option<Vec<(String, String)>>,
    /// Restrict speaker sections (and default comparisons) to one speaker.
    pub only_speaker: Option<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            pairs: None,
            only_speaker: None,
        }
    }
}

/// Analyse a whole transcript.
///
/// Fails on the first speaker whose analysis fails; there is no partial
/// report.
#[tracing::instrument(skip_all, fields(speakers = transcript.speakers().len(), top_n = options.top_n))]
pub fn analyze_transcript(
    transcript: &Transcript,
    lexicon: &Lexicon,
    options: &ReportOptions,
) -> AnalysisResult<DebateReport> {
    let selected: Vec<&Speaker> = match &options.only_speaker {
        Some(name) => vec![transcript.speaker(name)?],
        None => transcript.speakers().iter().collect(),
    };
    let pairs = resolve_pairs(transcript, options)?;

    let speakers = selected
        .into_iter()
        .map(|speaker| analyze_speaker(speaker, lexicon, options.top_n))
        .collect::<AnalysisResult<Vec<_>>>()?;

    let comparisons = pairs
        .into_iter()
        .map(|(a, b)| compare_speakers(a, b, lexicon, options.top_n))
        .collect();

    Ok(DebateReport {
        speakers,
        comparisons,
    })
}

/// Build one speaker's section of the report.
#[tracing::instrument(skip_all, fields(speaker = speaker.name()))]
pub fn analyze_speaker(
    speaker: &Speaker,
    lexicon: &Lexicon,
    top_n: usize,
) -> AnalysisResult<SpeakerReport> {
    let table = word_table(speaker, lexicon, WordFilter::NONE);
    let readability = speaker_readability(speaker, lexicon)?;

    Ok(SpeakerReport {
        name: speaker.name().to_string(),
        role: speaker.role(),
        total_words: table.total(),
        unique_words: table.unique(),
        top_words: table
            .filtered(&lexicon.words, WordFilter::STOPWORDS)
            .top(top_n),
        top_non_pronoun_words: table
            .filtered(&lexicon.words, WordFilter::STOPWORDS_AND_PRONOUNS)
            .top(top_n),
        readability,
    })
}

/// Frequency table over everything a speaker said.
pub fn word_table(speaker: &Speaker, lexicon: &Lexicon, filter: WordFilter) -> FrequencyTable {
    let tokens = speaker.utterances().iter().flat_map(|u| tokenize(u));
    FrequencyTable::from_tokens(tokens, &lexicon.words, filter)
}

/// One speaker's most frequent words under `filter`.
pub fn top_words(
    speaker: &Speaker,
    lexicon: &Lexicon,
    filter: WordFilter,
    top_n: usize,
) -> RankedList {
    word_table(speaker, lexicon, filter).top(top_n)
}

/// Sentence, word and syllable counts summed over a speaker's utterances.
pub fn speaker_counts(speaker: &Speaker, lexicon: &Lexicon) -> TextCounts {
    speaker
        .utterances()
        .iter()
        .map(|u| TextCounts::measure(u, &lexicon.syllables))
        .sum()
}

/// Readability of everything a speaker said.
pub fn speaker_readability(speaker: &Speaker, lexicon: &Lexicon) -> AnalysisResult<ReadabilityScore> {
    readability::score(speaker_counts(speaker, lexicon))
        .map_err(|e| e.for_speaker(speaker.name(), Stage::Readability))
}

/// Distinctive words between two speakers, stopwords removed.
#[tracing::instrument(skip_all, fields(a = a.name(), b = b.name()))]
pub fn compare_speakers(a: &Speaker, b: &Speaker, lexicon: &Lexicon, top_n: usize) -> ComparisonReport {
    let table_a = word_table(a, lexicon, WordFilter::STOPWORDS);
    let table_b = word_table(b, lexicon, WordFilter::STOPWORDS);
    ComparisonReport {
        speaker_a: a.name().to_string(),
        speaker_b: b.name().to_string(),
        distinctiveness: distinctive::compare(&table_a, &table_b, top_n),
    }
}

fn resolve_pairs<'t>(
    transcript: &'t Transcript,
    options: &ReportOptions,
) -> AnalysisResult<Vec<(&'t Speaker, &'t Speaker)>> {
    if let Some(pairs) = &options.pairs {
        return pairs
            .iter()
            .map(|(a, b)| Ok((transcript.speaker(a)?, transcript.speaker(b)?)))
            .collect();
    }

    let candidates: Vec<&Speaker> = transcript.candidates().collect();
    let mut pairs = Vec::new();
    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            pairs.push((*a, *b));
        }
    }

    if let Some(name) = &options.only_speaker {
        let only = transcript.speaker(name)?.name();
        pairs.retain(|(a, b)| a.name() == only || b.name() == only);
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::transcript::{ParseOptions, Role};

    const DEBATE: &str = "\
MODERATOR: Welcome, everyone. Let's begin.
SMITH: Jobs are the issue. Jobs and wages. We need jobs.
JONES: The border is the issue. The border and the economy.
MODERATOR: Thank you both.
SMITH: My plan creates jobs. The economy will grow.
JONES: They failed at the border. We will fix it.
";

    fn transcript() -> Transcript {
        Transcript::parse(DEBATE, &ParseOptions::default()).unwrap()
    }

    #[test]
    fn report_covers_every_speaker_in_order() {
        let report =
            analyze_transcript(&transcript(), &Lexicon::default(), &ReportOptions::default())
                .unwrap();
        let names: Vec<_> = report.speakers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["MODERATOR", "SMITH", "JONES"]);
        assert_eq!(report.speakers[0].role, Role::Moderator);
        assert_eq!(report.speakers[1].role, Role::Candidate);
    }

    #[test]
    fn default_comparison_is_candidate_pair() {
        let report =
            analyze_transcript(&transcript(), &Lexicon::default(), &ReportOptions::default())
                .unwrap();
        assert_eq!(report.comparisons.len(), 1);
        let cmp = &report.comparisons[0];
        assert_eq!((cmp.speaker_a.as_str(), cmp.speaker_b.as_str()), ("SMITH", "JONES"));
        assert_eq!(cmp.distinctiveness.more_in_a[0].word, "jobs");
        assert_eq!(cmp.distinctiveness.more_in_a[0].delta, 4);
        assert_eq!(cmp.distinctiveness.more_in_b[0].word, "border");
        assert_eq!(cmp.distinctiveness.more_in_b[0].delta, 3);
    }

    #[test]
    fn speaker_section_lists() {
        let t = transcript();
        let lexicon = Lexicon::default();
        let smith = analyze_speaker(t.speaker("SMITH").unwrap(), &lexicon, 20).unwrap();

        assert_eq!(smith.total_words, 18);
        assert_eq!(smith.readability.counts.words, smith.total_words);
        assert_eq!(smith.readability.counts.sentences, 5);
        assert_eq!(smith.top_words.words[0].word, "jobs");
        assert_eq!(smith.top_words.words[0].count, 4);
        // "we" is a pronoun: kept by the stopword list, dropped by the pronoun list.
        assert!(smith.top_words.words.iter().any(|w| w.word == "we"));
        assert!(smith.top_non_pronoun_words.words.iter().all(|w| w.word != "we"));
        assert!(smith.top_words.words.iter().all(|w| w.word != "the"));
    }

    #[test]
    fn explicit_pairs_and_only_speaker() {
        let options = ReportOptions {
            top_n: 3,
            pairs: Some(vec![("moderator".to_string(), "JONES".to_string())]),
            only_speaker: Some("SMITH".to_string()),
        };
        let report = analyze_transcript(&transcript(), &Lexicon::default(), &options).unwrap();
        assert_eq!(report.speakers.len(), 1);
        assert_eq!(report.speakers[0].name, "SMITH");
        assert!(report.speakers[0].top_words.words.len() <= 3);
        assert_eq!(report.comparisons.len(), 1);
        assert_eq!(report.comparisons[0].speaker_a, "MODERATOR");
    }

    #[test]
    fn unknown_pair_speaker_is_an_error() {
        let options = ReportOptions {
            pairs: Some(vec![("SMITH".to_string(), "NOBODY".to_string())]),
            ..ReportOptions::default()
        };
        let err = analyze_transcript(&transcript(), &Lexicon::default(), &options).unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownSpeaker { .. }));
    }

    #[test]
    fn degenerate_speaker_aborts_with_context() {
        let t = Transcript::parse("HOST:\nSMITH: Jobs matter.\n", &ParseOptions::default()).unwrap();
        let err = analyze_transcript(&t, &Lexicon::default(), &ReportOptions::default()).unwrap_err();
        match err {
            AnalysisError::Speaker {
                speaker,
                stage,
                source,
            } => {
                assert_eq!(speaker, "HOST");
                assert_eq!(stage, Stage::Readability);
                assert!(matches!(*source, AnalysisError::DegenerateInput { words: 0, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unpunctuated_interjection_still_scores() {
        let t = Transcript::parse(
            "MODERATOR: OK\nSMITH: Jobs matter. Jobs are good.\nJONES: No\n",
            &ParseOptions::default(),
        )
        .unwrap();
        let report =
            analyze_transcript(&t, &Lexicon::default(), &ReportOptions::default()).unwrap();
        let moderator = &report.speakers[0];
        assert_eq!(moderator.name, "MODERATOR");
        assert_eq!(moderator.readability.counts.words, 1);
        assert_eq!(moderator.readability.counts.sentences, 1);
        assert_eq!(report.speakers[2].readability.counts.sentences, 1);
    }

    #[test]
    fn report_serializes_to_json() {
        let report =
            analyze_transcript(&transcript(), &Lexicon::default(), &ReportOptions::default())
                .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["speakers"][1]["role"], "candidate");
        assert!(json["speakers"][1]["readability"]["reading_ease"].is_number());
        assert!(json["speakers"][1]["readability"]["syllables"].is_number());
        assert!(json["comparisons"][0]["more_in_a"].is_array());
    }
}
