//! Command-line interface definitions.
//!
//! Defines the CLI structure for the bipagem application using `clap`.
//! Report commands synthesize a period report and render it as summary
//! cards, a daily table, insights or CSV.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::error::Error;

/// Scan-logging report synthesizer and insight generator
#[derive(Parser, Debug)]
#[command(name = "bipagem")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the bipagem CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and inspect scan reports
    #[command(subcommand)]
    Report(ReportCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `bipagem report`.
#[derive(Subcommand, Debug)]
pub enum ReportCommand {
    /// Show summary cards, the daily table and insights.
    Show(ReportArgs),
    /// Show insights only.
    Insights(ReportArgs),
    /// Export the daily table as CSV.
    Export(ReportExportArgs),
}

/// Subcommands for `bipagem config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Optional configuration path shared by every command.
///
/// Without `--config`, `~/.bipagem/config.toml` is read when present and
/// defaults are used otherwise.
#[derive(Args, Debug, Default)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Report filters.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// First day of the period (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Last day of the period (YYYY-MM-DD, default: today).
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Platform filter: all, mercadolivre, shopee or loja_integrada.
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Seed for reproducible reports.
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub config: ConfigPathArg,
}

/// Arguments for `report export`.
#[derive(Args, Debug)]
pub struct ReportExportArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Output file path (writes to stdout if not specified).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_date(input: &str) -> std::result::Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|source| Error::DateParse {
        input: input.to_string(),
        source,
    })
}
