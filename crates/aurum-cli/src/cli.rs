//! CLI argument definitions for aurum.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `run` | Fetch quotes, compute today's premium, update history, classify the trend |
//! | `history` | Print the stored premium history tail |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--config` | `aurum.toml` | Config file path (missing file = defaults) |
//!
//! # Examples
//!
//! ```bash
//! # Daily scheduled run against Yahoo Finance, with Telegram delivery
//! aurum run --source yahoo --notify
//!
//! # Recompute from hand-checked numbers without touching history
//! aurum run --source manual --domestic 76000 --reference 2400 --fx 1350 --no-persist
//!
//! # Feed the last week to a chart collaborator
//! aurum history --last 7 --format json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Korean gold premium monitor.
///
/// Computes the premium of the domestic gold price over its
/// international fair value, keeps a rolling daily history, and
/// classifies the latest value against the trailing 7-sample window.
#[derive(Debug, Parser)]
#[command(name = "aurum", version, about = "Korean gold premium monitor")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = "aurum.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch quotes, compute today's premium, update history, classify the trend.
    Run(RunArgs),
    /// Print the stored premium history tail.
    History(HistoryArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Quote source to use (overrides the config file).
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// Domestic price, currency per domestic unit (manual source).
    #[arg(long)]
    pub domestic: Option<f64>,

    /// Reference price, foreign currency per foreign unit (manual source).
    #[arg(long)]
    pub reference: Option<f64>,

    /// FX rate, domestic currency per foreign currency unit (manual source).
    #[arg(long)]
    pub fx: Option<f64>,

    /// Foreign-unit to domestic-unit conversion factor override.
    #[arg(long)]
    pub unit_factor: Option<f64>,

    /// History file path override.
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Analyze without writing the history file.
    #[arg(long, default_value_t = false)]
    pub no_persist: bool,

    /// Send the rendered summary to Telegram.
    #[arg(long, default_value_t = false)]
    pub notify: bool,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// History file path override.
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Number of most recent records to print.
    #[arg(long, default_value_t = 7)]
    pub last: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    Yahoo,
    Fixture,
    Manual,
}
