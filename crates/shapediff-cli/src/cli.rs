use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shapediff",
    about = "Shapediff — structural comparison of JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two JSON documents and report where they diverge
    ///
    /// Exit status: 0 when equal, 1 when different, 2 on error.
    Compare(CompareArgs),
    /// Print the effective comparison configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// Left-hand (expected) document
    pub left: PathBuf,
    /// Right-hand (actual) document
    pub right: PathBuf,
    #[command(flatten)]
    pub settings: ConfigOverrides,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub settings: ConfigOverrides,
}

/// Configuration sources shared by every command: an optional TOML file,
/// then command-line overrides.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Maximum nesting depth to descend
    #[arg(long, conflicts_with = "no_max_depth")]
    pub max_depth: Option<usize>,
    /// Remove the nesting depth bound
    #[arg(long)]
    pub no_max_depth: bool,
    /// Report unequal values of unsupported kinds (floats)
    #[arg(long)]
    pub report_unsupported: bool,
}
