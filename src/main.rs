//! Socket Configurator CLI
//!
//! Usage: socket-configurator <COMMAND>
//!
//! Commands:
//!   generate  Validate policies and write socket.yml per repository
//!   validate  Only validate policy definitions
//!   check     Validate a rendered socket.yml
//!   diff      Preview what generate would change

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use socket_configurator::config::{load_layered, LoadedConfig};
use socket_configurator::Verbosity;
use tracing::{debug, warn};

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::generate::GenerateArgs;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(err) => {
            ui::logging::init(cli.verbose, Verbosity::default());
            return report_error(cli.json, "config", &err);
        }
    };

    ui::logging::init(cli.verbose, loaded.config.output.verbosity);
    if let Some(source) = &loaded.source {
        debug!("Using configuration: {}", source.display());
    }
    for warning in &loaded.warnings {
        warn!("{warning}");
    }
    for warning in &loaded.env_warnings {
        warn!("{warning}");
    }

    let command = command_name(&cli.command);
    match run(cli.command, &loaded, cli.json) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => report_error(cli.json, command, &err),
    }
}

fn load_config(cli: &Cli) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let user_config_dir = dirs::config_dir();
    let loaded = load_layered(cli.config.as_deref(), &cwd, user_config_dir.as_deref())?;
    Ok(loaded)
}

fn run(command: Commands, loaded: &LoadedConfig, json: bool) -> Result<bool> {
    let config = &loaded.config;
    match command {
        Commands::Generate {
            policy_dir,
            output_dir,
            repo,
            dry_run,
        } => commands::cmd_generate(
            config,
            GenerateArgs {
                policy_dir,
                output_dir,
                repo,
                dry_run,
            },
            json,
        ),
        Commands::Validate {
            policy_dir,
            strict_warnings,
        } => commands::cmd_validate(config, policy_dir, strict_warnings, json),
        Commands::Check { file } => commands::cmd_check(&file, json),
        Commands::Diff {
            policy_dir,
            output_dir,
            repo,
        } => commands::cmd_diff(config, policy_dir, output_dir, repo, json),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Validate { .. } => "validate",
        Commands::Check { .. } => "check",
        Commands::Diff { .. } => "diff",
    }
}

fn report_error(json: bool, command: &str, err: &anyhow::Error) -> ExitCode {
    if json {
        let _ = ui::json::emit(&ui::json::ErrorEvent::new(command, err));
    } else {
        eprintln!("Error: {err:#}");
    }
    ExitCode::FAILURE
}
