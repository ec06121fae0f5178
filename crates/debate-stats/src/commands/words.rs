//! Words command: one speaker's ranked word list.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use debate_stats_core::analysis;
use debate_stats_core::config::Config;
use debate_stats_core::word_lists::{FilterMode, WordFilter};

use super::{load_lexicon, load_transcript, print_ranked, resolve_top_n};

/// Arguments for the `words` subcommand.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Transcript file to analyze.
    pub transcript: Utf8PathBuf,

    /// Speaker whose words to rank.
    #[arg(long)]
    pub speaker: String,

    /// Which words to leave out.
    #[arg(long, value_enum, default_value_t)]
    pub filter: FilterMode,

    /// Length of the ranked list.
    #[arg(long)]
    pub top: Option<usize>,
}

/// Rank a speaker's most frequent words.
#[instrument(name = "cmd_words", skip_all, fields(file = %args.transcript, speaker = %args.speaker))]
pub fn cmd_words(args: WordsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(filter = ?args.filter, top = ?args.top, "executing words command");

    let transcript = load_transcript(&args.transcript, config)?;
    let speaker = transcript
        .speaker(&args.speaker)
        .with_context(|| format!("failed to analyze {}", args.transcript))?;
    let lexicon = load_lexicon(config)?;

    let top_n = resolve_top_n(args.top, config);
    let list = analysis::top_words(speaker, &lexicon, WordFilter::from(args.filter), top_n);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    println!(
        "{} {}",
        speaker.name().bold(),
        format!("({} counted words)", list.counted_words).dimmed()
    );
    print_ranked(&list);
    Ok(())
}
