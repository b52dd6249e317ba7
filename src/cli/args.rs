//! CLI argument parsing structures.

use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

use super::commands::Commands;

/// Main CLI structure for securefile.
#[derive(Parser, Debug)]
#[command(name = "securefile", version)]
#[command(
    about = "Inspect and enforce ownership and permissions on sensitive files",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Global configuration arguments available to all commands.
#[derive(Debug, Default, Args)]
pub struct ConfigArgs {
    /// Config file to use instead of searching the standard locations
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Editor to use for the edit command
    #[arg(long, global = true)]
    pub editor: Option<String>,
}
