//! Analyze command: the full per-speaker and comparison report.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use debate_stats_core::analysis::{self, ComparisonReport, ReportOptions, SpeakerReport};
use debate_stats_core::config::Config;

use super::{load_lexicon, load_transcript, print_deltas, print_ranked, resolve_top_n};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Transcript file to analyze.
    pub transcript: Utf8PathBuf,

    /// Length of each ranked word list.
    #[arg(long)]
    pub top: Option<usize>,

    /// Speaker pair to compare, as `A,B` (repeatable). Defaults to every candidate pair.
    #[arg(long, value_name = "A,B")]
    pub compare: Vec<String>,

    /// Only report on this speaker.
    #[arg(long)]
    pub speaker: Option<String>,
}

/// Run the full analysis on a transcript.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.transcript))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.transcript, top = ?args.top, compare = ?args.compare, "executing analyze command");

    let pairs = if args.compare.is_empty() {
        None
    } else {
        Some(
            args.compare
                .iter()
                .map(|spec| parse_pair(spec))
                .collect::<anyhow::Result<Vec<_>>>()?,
        )
    };
    let options = ReportOptions {
        top_n: resolve_top_n(args.top, config),
        pairs,
        only_speaker: args.speaker,
    };

    let transcript = load_transcript(&args.transcript, config)?;
    let lexicon = load_lexicon(config)?;
    let report = analysis::analyze_transcript(&transcript, &lexicon, &options)
        .with_context(|| format!("failed to analyze {}", args.transcript))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.transcript.bold());
    for speaker in &report.speakers {
        print_speaker(speaker);
    }
    for comparison in &report.comparisons {
        print_comparison(comparison);
    }

    Ok(())
}

fn parse_pair(spec: &str) -> anyhow::Result<(String, String)> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => Ok(((*a).to_string(), (*b).to_string())),
        _ => bail!("invalid --compare value {spec:?}: expected two speaker names separated by a comma"),
    }
}

fn print_speaker(s: &SpeakerReport) {
    let counts = &s.readability.counts;
    println!("\n{} {}", s.name.bold(), format!("({})", s.role).dimmed());
    println!(
        "  {} {} total, {} unique, {} sentences, {} syllables",
        "Words:".cyan(),
        s.total_words,
        s.unique_words,
        counts.sentences,
        counts.syllables,
    );
    println!(
        "  {} Reading ease {:.1}, grade level {:.1}",
        "Readability:".cyan(),
        s.readability.reading_ease,
        s.readability.grade_level,
    );
    println!("  {}", "Top words:".cyan());
    print_ranked(&s.top_words);
    println!("  {}", "Top words (pronouns removed):".cyan());
    print_ranked(&s.top_non_pronoun_words);
}

fn print_comparison(c: &ComparisonReport) {
    println!("\n{} vs {}", c.speaker_a.bold(), c.speaker_b.bold());
    println!("  {} {}:", "Used more by".cyan(), c.speaker_a);
    print_deltas(&c.distinctiveness.more_in_a);
    println!("  {} {}:", "Used more by".cyan(), c.speaker_b);
    print_deltas(&c.distinctiveness.more_in_b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_speaker_pair() {
        assert_eq!(
            parse_pair("SMITH, JONES").unwrap(),
            ("SMITH".to_string(), "JONES".to_string())
        );
    }

    #[test]
    fn rejects_malformed_pair() {
        assert!(parse_pair("SMITH").is_err());
        assert!(parse_pair("A,B,C").is_err());
        assert!(parse_pair("SMITH,").is_err());
    }
}
