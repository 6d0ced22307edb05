//! Command-line interface definitions.
//!
//! Defines the CLI structure for the pricesweep binary using `clap`.

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::application::scan::ScanStrategy;

/// Exhaustive catalog retrieval over page-capped, price-filtered APIs
#[derive(Parser, Debug)]
#[command(name = "pricesweep")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retrieve every item from the catalog and print it as JSON
    Scan(ScanArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `pricesweep check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Strategy selection on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Fixed-width windows upward until the catalog total is reached
    #[default]
    Ascending,
    /// Whole configured domain first, bisected on overflow
    Descending,
}

impl From<StrategyArg> for ScanStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Ascending => Self::Ascending,
            StrategyArg::Descending => Self::Descending,
        }
    }
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Scan strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Ascending)]
    pub strategy: StrategyArg,

    /// Override ascending window width
    #[arg(long)]
    pub step_size: Option<Decimal>,

    /// Override catalog API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Write items to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
