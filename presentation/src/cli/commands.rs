//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for discussion results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output: transcript plus derived artifacts
    Full,
    /// Only the transcript
    Transcript,
    /// JSON output
    Json,
    /// Markdown document
    Markdown,
}

/// CLI arguments for roundtable
#[derive(Parser, Debug)]
#[command(name = "roundtable")]
#[command(author, version, about = "Simulated multi-role discussions driven by Gemini")]
#[command(long_about = r#"
Roundtable runs a simulated discussion among 2-6 user-defined roles on a
topic. Roles speak in order; within each turn every role speaks exactly
once. A discussion can be grounded in a reference document, continued with
additional turns, and steered with a guidance instruction.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./roundtable.toml   Project-level config
3. ~/.config/roundtable/config.toml   Global config

The GEMINI_API_KEY environment variable must be set.

Examples:
  roundtable "Four-day work week" -r "CEO: growth-focused" -r "CFO: guards the budget" -t 3
  roundtable "New market entry" -r CEO -r CTO -d brief.txt --summary --action-items
  roundtable --transcript saved.json --continue-turns 2 -g "focus on risks"
"#)]
pub struct Cli {
    /// The discussion topic (not required when continuing a transcript)
    pub topic: Option<String>,

    /// A role, as NAME or "NAME: DESCRIPTION" (repeat for each role)
    #[arg(short, long = "role", value_name = "SPEC")]
    pub role: Vec<String>,

    /// Total discussion turns for a fresh run (1-10, default 3)
    #[arg(short, long, value_name = "N")]
    pub turns: Option<u32>,

    /// Continue a saved transcript by this many additional turns (1-5)
    #[arg(long, value_name = "N")]
    pub continue_turns: Option<u32>,

    /// Saved transcript to continue (JSON, as written by --save)
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Guidance instruction injected before continuing
    #[arg(short, long, value_name = "TEXT")]
    pub guidance: Option<String>,

    /// Reference document to ground the discussion in
    #[arg(short, long, value_name = "PATH")]
    pub document: Option<PathBuf>,

    /// Output language ("ja", "en", or any language name)
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Model id for discussion turns
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature (0.0-1.0)
    #[arg(long, value_name = "T")]
    pub temperature: Option<f32>,

    /// Maximum output tokens per utterance
    #[arg(long, value_name = "N")]
    pub max_output_tokens: Option<u32>,

    /// Generate a markdown summary after the discussion
    #[arg(long)]
    pub summary: bool,

    /// Extract per-role action items after the discussion
    #[arg(long)]
    pub action_items: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Save the full transcript as JSON
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Write a JSONL log of produced utterances
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Session key for the document slot
    #[arg(long, default_value = "default", value_name = "KEY")]
    pub session: String,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
