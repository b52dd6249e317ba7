//! Config command handlers - managing configuration.

use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::error::Result;

/// Handle the config subcommands.
///
/// `config_path` is the file named by `--config`, if any.
pub fn handle_config(command: &ConfigCommands, config_path: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommands::Generate { path, overwrite } => {
            let target = path
                .clone()
                .or_else(|| config_path.map(Path::to_path_buf));
            let written = Config::generate_config_file(target, *overwrite)?;
            println!("Config file written to: {}", written.display());
        }
        ConfigCommands::Show => {
            let config = match config_path {
                Some(path) => Config::load_from_path(path)?,
                None => Config::load()?,
            };
            let policy = config.policy()?;
            print!("{}", config.to_kdl());
            println!(
                "// effective policy: mode {:o} owner {}:{}",
                policy.mode, policy.uid, policy.gid
            );
        }
        ConfigCommands::Path => {
            match config_path
                .map(Path::to_path_buf)
                .or_else(Config::find_existing_config)
            {
                Some(path) => println!("{}", path.display()),
                None => println!(
                    "No config file found (defaults in use). Create one with: securefile config generate"
                ),
            }
        }
    }
    Ok(())
}
