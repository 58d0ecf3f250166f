//! Vidcut - remove a time range from a video file.
//!
//! This crate plans which spans of a video to keep and drives `ffmpeg` to
//! produce them, either through a re-encoding filter graph or by stream
//! copying each span and concatenating the parts.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod cutter;
pub mod error;
pub mod output;
pub mod utils;

use clap::Parser;
use cli::{Cli, Command};
use config::{Config, config_file_path, load_default_config, save_default_config, validate_config};
use cutter::command::{CutOptions, execute};

pub use error::{Error, Result};

/// Main entry point for vidcut CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.cut.verbose, cli.cut.quiet);

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let input = cli.input.ok_or(Error::MissingInput)?;
    let output_mode = cli.cut.output_mode;

    let result = load_default_config()
        .and_then(|config| {
            validate_config(&config)?;
            Ok(config)
        })
        .and_then(|config| execute(&input, &CutOptions::resolve(&cli.cut, &config), output_mode));

    if let Err(ref e) = result
        && output_mode.is_structured()
    {
        output::emit_json_error(e);
    }

    result
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // stdout carries command lines and results
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
