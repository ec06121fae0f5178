//! Core library for debate-stats.
//!
//! This crate provides the lexical statistics pipeline used by the
//! `debate-stats` CLI and any downstream consumers: transcript parsing,
//! tokenization, stopword and pronoun filtering, frequency ranking,
//! syllable counting, readability scoring and distinctive-word comparison.
//!
//! # Modules
//!
//! - [`transcript`] - Speaker-tagged transcript parsing
//! - [`tokenize`] - Word tokenizer
//! - [`word_lists`] - Stopword and pronoun sets, word filters
//! - [`dictionaries`] - Pronunciation dictionary and abbreviations
//! - [`frequency`] - Frequency tables and ranked lists
//! - [`readability`] - Flesch Reading Ease and Flesch-Kincaid Grade
//! - [`distinctive`] - Distinctive words between two speakers
//! - [`analysis`] - Report builder
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use debate_stats_core::{ConfigLoader, Lexicon, ReportOptions, Transcript, analyze_transcript};
//!
//! let (config, _sources) = ConfigLoader::new()
//!     .with_user_config(true)
//!     .load()
//!     .expect("Failed to load configuration");
//! let lexicon = Lexicon::from_config(&config).expect("Failed to load reference data");
//!
//! let text = std::fs::read_to_string("debate.txt").expect("Failed to read transcript");
//! let transcript = Transcript::parse(&text, &config.parse_options()).expect("Bad transcript");
//! let report = analyze_transcript(&transcript, &lexicon, &ReportOptions::default())
//!     .expect("Analysis failed");
//!
//! for speaker in &report.speakers {
//!     println!("{}: {:.1}", speaker.name, speaker.readability.reading_ease);
//! }
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod dictionaries;
pub mod distinctive;
pub mod error;
pub mod frequency;
pub mod lexicon;
pub mod readability;
pub mod text;
pub mod tokenize;
pub mod transcript;
pub mod word_lists;

pub use analysis::{DebateReport, ReportOptions, analyze_transcript};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult, Stage};
pub use lexicon::Lexicon;
pub use transcript::{ParseOptions, Role, Speaker, Transcript};
pub use word_lists::{FilterMode, WordFilter};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
