//! Command and subcommand definitions.

use clap::Subcommand;
use std::path::PathBuf;

/// Top-level commands available in securefile.
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    File(FileCommands),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Commands that operate on files under the configured policy.
#[derive(Subcommand, Debug)]
pub enum FileCommands {
    /// Print a file's size in KiB
    Size { path: PathBuf },
    /// Print a file's permission bits (e.g. 640)
    Bits { path: PathBuf },
    /// Report whether files satisfy the security policy
    Check {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply the policy mode and ownership to files
    Secure {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Create a new empty file
    Create {
        path: PathBuf,

        /// Apply the policy after creating the file
        #[arg(short, long)]
        secure: bool,
    },
    /// Copy a file's content into another file
    Clone {
        from: PathBuf,
        to: PathBuf,

        /// Hand the destination to the policy owner and group
        #[arg(short, long)]
        secure: bool,
    },
    /// Remove a file
    Remove {
        path: PathBuf,

        /// Ignore failures to delete the file
        #[arg(short, long)]
        silent: bool,
    },
    /// Edit a secured file through a private scratch copy
    Edit { path: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate a new config file
    Generate {
        /// Path where to create the config file (default: ~/.config/securefile/securefile.kdl)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite existing config file if it exists
        #[arg(long)]
        overwrite: bool,
    },
    /// Print the active configuration as KDL
    Show,
    /// Print the path of the config file in use
    Path,
}
