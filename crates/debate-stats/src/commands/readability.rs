//! Readability command: Flesch scores for every speaker.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use debate_stats_core::analysis;
use debate_stats_core::config::Config;
use debate_stats_core::readability::ReadabilityScore;
use debate_stats_core::transcript::Role;

use super::{load_lexicon, load_transcript};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// Transcript file to analyze.
    pub transcript: Utf8PathBuf,
}

#[derive(Serialize)]
struct SpeakerReadability<'a> {
    name: &'a str,
    role: Role,
    #[serde(flatten)]
    score: ReadabilityScore,
}

/// Score readability of each speaker in a transcript.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.transcript))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(file = %args.transcript, "executing readability command");

    let transcript = load_transcript(&args.transcript, config)?;
    let lexicon = load_lexicon(config)?;

    let scores = transcript
        .speakers()
        .iter()
        .map(|speaker| {
            analysis::speaker_readability(speaker, &lexicon).map(|score| SpeakerReadability {
                name: speaker.name(),
                role: speaker.role(),
                score,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to score {}", args.transcript))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
        return Ok(());
    }

    for s in &scores {
        println!(
            "{} {}: reading ease {:.1}, grade level {:.1} {}",
            s.name.bold(),
            format!("({})", s.role).dimmed(),
            s.score.reading_ease,
            s.score.grade_level,
            format!(
                "[{} sentences, {} words, {} syllables]",
                s.score.counts.sentences, s.score.counts.words, s.score.counts.syllables
            )
            .dimmed(),
        );
    }

    Ok(())
}
