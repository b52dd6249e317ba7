use clap::Parser;

use securefile::cli::{Cli, Commands, FileCommands};
use securefile::config::{Config, Defaults};
use securefile::file::SecureFile;
use securefile::utils::{exit_code, format_error};
use securefile::{FileError, commands, logging};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("securefile: {}", format_error(&e));
            std::process::exit(exit_code(&e));
        }
    }
}

/// Run the command, returning the process exit code.
fn run(cli: Cli) -> Result<i32, FileError> {
    let config_path = cli.config.config_path.as_deref();

    // Config commands must work even when the config file is broken.
    let command = match &cli.command {
        Commands::Config { command } => {
            logging::init(&logging::level_for(cli.verbose, "warn"));
            commands::handle_config(command, config_path)?;
            return Ok(0);
        }
        Commands::File(command) => command,
    };

    let mut config = match config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(editor) = &cli.config.editor {
        config.defaults.get_or_insert_with(Defaults::default).editor = Some(editor.clone());
    }

    logging::init(&logging::level_for(cli.verbose, &config.log_level()));

    let files = SecureFile::new(config.policy()?);
    run_file_command(command, &config, &files)
}

fn run_file_command(
    command: &FileCommands,
    config: &Config,
    files: &SecureFile,
) -> Result<i32, FileError> {
    match command {
        FileCommands::Size { path } => commands::handle_size(path)?,
        FileCommands::Bits { path } => commands::handle_bits(path)?,
        FileCommands::Check { paths, json } => {
            if !commands::handle_check(files, paths, *json)? {
                return Ok(1);
            }
        }
        FileCommands::Secure { paths } => commands::handle_secure(files, paths)?,
        FileCommands::Create { path, secure } => commands::handle_create(files, path, *secure)?,
        FileCommands::Clone { from, to, secure } => {
            commands::handle_clone(files, from, to, *secure)?
        }
        FileCommands::Remove { path, silent } => commands::handle_remove(path, *silent)?,
        FileCommands::Edit { path } => {
            if commands::handle_edit(config, files, path)? == commands::EditOutcome::Unchanged {
                println!("{} unchanged", path.display());
            }
        }
    }

    Ok(0)
}
