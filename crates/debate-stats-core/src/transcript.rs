//! Transcript parsing.
//!
//! A transcript is a text file of speaker-tagged lines:
//!
//! ```text
//! # ABC News presidential debate, September 10
//! DAVID MUIR: Good evening, everyone.
//! VICE PRESIDENT KAMALA HARRIS: Thank you.
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Every other line must
//! start with a speaker tag followed by a colon; anything else is a
//! [`AnalysisError::MalformedTranscript`], because guessing who said an
//! unattributed line would skew every statistic downstream.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::tokenize::count_tokens;

/// A speaker tag: starts with a letter; letters, spaces, `.`, `'` and `-` after that.
static SPEAKER_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}[\p{L} .'\-]*$").expect("valid regex"));

/// A speaker's part in the debate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A debate participant.
    Candidate,
    /// Anyone else (moderators, hosts).
    Moderator,
}

impl Role {
    /// Returns the role as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Moderator => "moderator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One person in the transcript and everything they said, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speaker {
    name: String,
    role: Role,
    utterances: Vec<String>,
}

impl Speaker {
    /// The canonical speaker name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Candidate or moderator.
    pub const fn role(&self) -> Role {
        self.role
    }

    /// The speaker's utterances in transcript order.
    pub fn utterances(&self) -> &[String] {
        &self.utterances
    }

    /// Number of words the speaker said, before any filtering.
    pub fn word_count(&self) -> usize {
        self.utterances.iter().map(|u| count_tokens(u)).sum()
    }
}

/// Options that adapt parsing to a particular transcript source.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Alternate speaker tags mapped to the canonical name.
    pub aliases: HashMap<String, String>,
    /// Speakers to mark as candidates. When `None`, the two speakers with the
    /// most words are candidates.
    pub candidates: Option<Vec<String>>,
}

impl ParseOptions {
    fn canonical<'a>(&'a self, tag: &'a str) -> &'a str {
        self.aliases.get(tag).map_or(tag, String::as_str)
    }
}

/// A parsed transcript: speakers in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    speakers: Vec<Speaker>,
}

impl Transcript {
    /// Parse transcript text.
    #[tracing::instrument(skip_all, fields(input_len = input.len()))]
    pub fn parse(input: &str, options: &ParseOptions) -> AnalysisResult<Self> {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        let mut speakers: Vec<Speaker> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (i, line) in input.lines().enumerate() {
            let line_no = i + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((tag, text)) = trimmed.split_once(':') else {
                return Err(AnalysisError::MalformedTranscript {
                    line: line_no,
                    reason: "expected `SPEAKER: text`".to_string(),
                });
            };
            let tag = tag.trim();
            if !SPEAKER_TAG.is_match(tag) {
                return Err(AnalysisError::MalformedTranscript {
                    line: line_no,
                    reason: format!("invalid speaker tag {tag:?}"),
                });
            }

            let name = options.canonical(tag);
            let slot = *index.entry(name.to_string()).or_insert_with(|| {
                speakers.push(Speaker {
                    name: name.to_string(),
                    role: Role::Moderator,
                    utterances: Vec::new(),
                });
                speakers.len() - 1
            });

            let text = text.trim();
            if !text.is_empty() {
                speakers[slot].utterances.push(text.to_string());
            }
        }

        if speakers.is_empty() {
            return Err(AnalysisError::EmptyTranscript);
        }

        assign_roles(&mut speakers, options);
        tracing::debug!(speakers = speakers.len(), "parsed transcript");
        Ok(Self { speakers })
    }

    /// All speakers, in order of first appearance.
    pub fn speakers(&self) -> &[Speaker] {
        &self.speakers
    }

    /// Speaker names, in order of first appearance.
    pub fn names(&self) -> Vec<&str> {
        self.speakers.iter().map(Speaker::name).collect()
    }

    /// Find a speaker by name (case-insensitive).
    pub fn speaker(&self, name: &str) -> AnalysisResult<&Speaker> {
        let wanted = name.trim();
        self.speakers
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AnalysisError::UnknownSpeaker {
                name: wanted.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Speakers with the candidate role, in order of first appearance.
    pub fn candidates(&self) -> impl Iterator<Item = &Speaker> {
        self.speakers.iter().filter(|s| s.role == Role::Candidate)
    }
}

fn assign_roles(speakers: &mut [Speaker], options: &ParseOptions) {
    match &options.candidates {
        Some(names) => {
            for name in names {
                let name = options.canonical(name.trim());
                match speakers.iter_mut().find(|s| s.name == name) {
                    Some(speaker) => speaker.role = Role::Candidate,
                    None => tracing::warn!(candidate = name, "configured candidate not in transcript"),
                }
            }
        }
        None => {
            let mut by_words: Vec<(usize, usize)> = speakers
                .iter()
                .enumerate()
                .map(|(i, s)| (i, s.word_count()))
                .collect();
            // Most words first; earlier speaker wins a tie.
            by_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for &(i, _) in by_words.iter().take(2) {
                speakers[i].role = Role::Candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBATE: &str = "\
# Sample debate
MODERATOR: Welcome to the debate. First question.
SENATOR SMITH: Thank you. I believe in jobs, jobs, and more jobs.
GOVERNOR JONES: My opponent is wrong about jobs and wages.

SENATOR SMITH: Let me respond.
SEN. SMITH: The economy matters.
";

    fn options() -> ParseOptions {
        ParseOptions {
            aliases: HashMap::from([("SEN. SMITH".to_string(), "SENATOR SMITH".to_string())]),
            candidates: None,
        }
    }

    #[test]
    fn parses_speakers_in_order() {
        let t = Transcript::parse(DEBATE, &options()).unwrap();
        assert_eq!(t.names(), vec!["MODERATOR", "SENATOR SMITH", "GOVERNOR JONES"]);
    }

    #[test]
    fn merges_aliases_and_keeps_utterance_order() {
        let t = Transcript::parse(DEBATE, &options()).unwrap();
        let smith = t.speaker("SENATOR SMITH").unwrap();
        assert_eq!(smith.utterances().len(), 3);
        assert_eq!(smith.utterances()[2], "The economy matters.");
    }

    #[test]
    fn unaliased_variant_is_separate_speaker() {
        let t = Transcript::parse(DEBATE, &ParseOptions::default()).unwrap();
        assert_eq!(t.speakers().len(), 4);
    }

    #[test]
    fn top_two_speakers_become_candidates() {
        let t = Transcript::parse(DEBATE, &options()).unwrap();
        let candidates: Vec<_> = t.candidates().map(Speaker::name).collect();
        assert_eq!(candidates, vec!["SENATOR SMITH", "GOVERNOR JONES"]);
        assert_eq!(t.speaker("moderator").unwrap().role(), Role::Moderator);
    }

    #[test]
    fn configured_candidates_resolve_aliases() {
        let opts = ParseOptions {
            candidates: Some(vec!["SEN. SMITH".to_string(), "MODERATOR".to_string()]),
            ..options()
        };
        let t = Transcript::parse(DEBATE, &opts).unwrap();
        let candidates: Vec<_> = t.candidates().map(Speaker::name).collect();
        assert_eq!(candidates, vec!["MODERATOR", "SENATOR SMITH"]);
        assert_eq!(t.speaker("GOVERNOR JONES").unwrap().role(), Role::Moderator);
    }

    #[test]
    fn untagged_line_is_malformed() {
        let input = "MODERATOR: Hello.\nthis line has no tag\n";
        let err = Transcript::parse(input, &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedTranscript { line: 2, .. }));
    }

    #[test]
    fn timestamp_tag_is_malformed() {
        let input = "MODERATOR: Hello.\n10:30 PM applause\n";
        let err = Transcript::parse(input, &ParseOptions::default()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert!(err.to_string().contains("\"10\""));
    }

    #[test]
    fn colon_inside_utterance_is_kept() {
        let input = "MODERATOR: The question is: why?\n";
        let t = Transcript::parse(input, &ParseOptions::default()).unwrap();
        assert_eq!(t.speakers()[0].utterances()[0], "The question is: why?");
    }

    #[test]
    fn empty_utterance_registers_speaker() {
        let input = "MODERATOR:\nGUEST: Hi there.\n";
        let t = Transcript::parse(input, &ParseOptions::default()).unwrap();
        assert_eq!(t.names(), vec!["MODERATOR", "GUEST"]);
        assert!(t.speakers()[0].utterances().is_empty());
        assert_eq!(t.speakers()[0].word_count(), 0);
    }

    #[test]
    fn comments_blanks_and_bom_skipped() {
        let input = "\u{feff}# header\n\n   \nMODERATOR: Hi.\n";
        let t = Transcript::parse(input, &ParseOptions::default()).unwrap();
        assert_eq!(t.names(), vec!["MODERATOR"]);
    }

    #[test]
    fn no_speakers_is_an_error() {
        let err = Transcript::parse("# only comments\n\n", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyTranscript));
    }

    #[test]
    fn unknown_speaker_lists_available() {
        let t = Transcript::parse(DEBATE, &options()).unwrap();
        let err = t.speaker("NOBODY").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("NOBODY"));
        assert!(msg.contains("GOVERNOR JONES"));
    }
}
