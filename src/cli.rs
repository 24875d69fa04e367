#![allow(clippy::missing_errors_doc)]

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::domain::{dates::parse_date, error::MalformedDateError};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormatArg {
    #[default]
    Text,
    Html,
    Json,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "venue-shows",
    version,
    about = "Render a venue's upcoming show schedule"
)]
pub struct Cli {
    /// Firestore project id
    #[arg(long)]
    pub project: Option<String>,

    /// Collection holding show documents (default: shows)
    #[arg(long)]
    pub collection: Option<String>,

    /// Web API key sent with each query
    #[arg(long)]
    pub api_key: Option<String>,

    /// Firestore REST base URL (emulators, tests)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Reference date instead of the local calendar date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_reference_date)]
    pub today: Option<NaiveDate>,

    /// Days covered by the hero highlight (1..31)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=31))]
    pub hero_days: Option<u32>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Write the rendered page to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Keep running and re-render on every refresh
    #[arg(long)]
    pub watch: bool,

    /// Refresh interval in seconds for --watch
    #[arg(long, value_parser = clap::value_parser!(u64).range(10..))]
    pub refresh_interval: Option<u64>,

    /// Persist the effective settings to the config file
    #[arg(long)]
    pub save_settings: bool,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
}

fn parse_reference_date(value: &str) -> Result<NaiveDate, MalformedDateError> {
    parse_date(value)
}

/// Logs go to stderr so stdout carries only the rendered page.
pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = match (quiet, verbose) {
        (2.., _) => "error",
        (1, _) => "warn",
        (0, 3..) => "trace",
        (0, 2) => "debug",
        (0, 1) => "info",
        (0, 0) => "warn",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
