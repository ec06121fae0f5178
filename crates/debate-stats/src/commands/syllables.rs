//! Syllables command: per-word syllable counts and where they came from.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use debate_stats_core::config::Config;
use debate_stats_core::dictionaries::SyllableSource;
use debate_stats_core::tokenize::tokenize;

use super::load_lexicon;

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to count.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SyllableCount {
    word: String,
    syllables: usize,
    source: SyllableSource,
}

/// Count syllables for each word.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing syllables command");

    let lexicon = load_lexicon(config)?;
    let counts: Vec<SyllableCount> = args
        .words
        .iter()
        .flat_map(|arg| tokenize(arg))
        .map(|word| {
            let (syllables, source) = lexicon.syllables.count_with_source(&word);
            SyllableCount {
                word,
                syllables,
                source,
            }
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    for c in &counts {
        let source = match c.source {
            SyllableSource::Dictionary => "dictionary".green().to_string(),
            SyllableSource::Heuristic => "heuristic".yellow().to_string(),
        };
        println!("{}: {} ({})", c.word.bold(), c.syllables, source);
    }
    Ok(())
}
