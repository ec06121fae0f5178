//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::OwoColorize;

use debate_stats_core::config::Config;
use debate_stats_core::distinctive::WordDelta;
use debate_stats_core::frequency::{DEFAULT_TOP_N, RankedList};
use debate_stats_core::{Lexicon, Transcript};

pub mod analyze;
pub mod compare;
pub mod info;
pub mod readability;
pub mod schema;
pub mod syllables;
pub mod words;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read and parse a transcript using the configured aliases and candidates.
pub fn load_transcript(path: &Utf8Path, config: &Config) -> anyhow::Result<Transcript> {
    let content = read_input_file(path, config.input_limit())?;
    Transcript::parse(&content, &config.parse_options())
        .with_context(|| format!("failed to parse {path}"))
}

/// Load the word lists and pronunciation dictionary the configuration names.
pub fn load_lexicon(config: &Config) -> anyhow::Result<Lexicon> {
    Lexicon::from_config(config).context("failed to load reference data")
}

/// Ranked list length: command line, then config, then the default.
pub fn resolve_top_n(arg: Option<usize>, config: &Config) -> usize {
    arg.or(config.top_n).unwrap_or(DEFAULT_TOP_N)
}

/// Print a ranked list as `word (N times)` lines.
pub(crate) fn print_ranked(list: &RankedList) {
    if list.words.is_empty() {
        println!("    {}", "(no words)".dimmed());
        return;
    }
    for w in &list.words {
        println!("    {} ({} times)", w.word, w.count);
    }
}

/// Print distinctive words as `word (N times more)` lines.
pub(crate) fn print_deltas(deltas: &[WordDelta]) {
    if deltas.is_empty() {
        println!("    {}", "(none)".dimmed());
        return;
    }
    for d in deltas {
        println!("    {} ({} times more)", d.word, d.delta);
    }
}
