//! Compare command: distinctive words between two speakers.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use debate_stats_core::analysis;
use debate_stats_core::config::Config;

use super::{load_lexicon, load_transcript, print_deltas, resolve_top_n};

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Transcript file to analyze.
    pub transcript: Utf8PathBuf,

    /// First speaker.
    pub a: String,

    /// Second speaker.
    pub b: String,

    /// Length of each ranked list.
    #[arg(long)]
    pub top: Option<usize>,
}

/// Rank the words each speaker used more than the other.
#[instrument(name = "cmd_compare", skip_all, fields(file = %args.transcript))]
pub fn cmd_compare(args: CompareArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(a = %args.a, b = %args.b, top = ?args.top, "executing compare command");

    let transcript = load_transcript(&args.transcript, config)?;
    let context = || format!("failed to compare speakers in {}", args.transcript);
    let a = transcript.speaker(&args.a).with_context(context)?;
    let b = transcript.speaker(&args.b).with_context(context)?;
    let lexicon = load_lexicon(config)?;

    let report = analysis::compare_speakers(a, b, &lexicon, resolve_top_n(args.top, config));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}:", "Used more by".cyan(), report.speaker_a.bold());
    print_deltas(&report.distinctiveness.more_in_a);
    println!("{} {}:", "Used more by".cyan(), report.speaker_b.bold());
    print_deltas(&report.distinctiveness.more_in_b);
    Ok(())
}
