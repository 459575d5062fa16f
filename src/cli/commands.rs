//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::IoResultExt;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::session::Session;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Run) => cmd_run(cli.config.as_deref()),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(cli.config.as_deref()),
            ConfigCommands::Path => cmd_config_path(cli.config.as_deref()),
            ConfigCommands::Init { force } => cmd_config_init(*force),
        },
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

fn load_settings(config_file: Option<&Path>) -> CliResult<Settings> {
    if let Some(path) = config_file {
        if !path.is_file() {
            return Err(CliError::InvalidArgs(format!(
                "config file not found: {}",
                path.display()
            )));
        }
    }
    Ok(Settings::load(config_file)?)
}

#[instrument]
fn cmd_run(config_file: Option<&Path>) -> CliResult<()> {
    let settings = load_settings(config_file)?;
    debug!("settings: {:?}", settings);
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), settings);
    session.run()?;
    debug!("Session ended with {} employees", session.tree().len());
    Ok(())
}

#[instrument]
fn cmd_config_show(config_file: Option<&Path>) -> CliResult<()> {
    let settings = load_settings(config_file)?;
    let toml = settings.to_toml()?;
    output::info(&mut io::stdout(), &toml).with_context("write output")?;
    Ok(())
}

#[instrument]
fn cmd_config_path(config_file: Option<&Path>) -> CliResult<()> {
    let mut out = io::stdout();
    let global = global_config_path()
        .map(|p| {
            let state = if p.exists() { "exists" } else { "not found" };
            format!("{} ({})", p.display(), state)
        })
        .unwrap_or_else(|| "unavailable".to_string());
    output::info(&mut out, &format!("global: {}", global)).with_context("write output")?;
    if let Some(path) = config_file {
        output::info(&mut out, &format!("file:   {}", path.display())).with_context("write output")?;
    }
    Ok(())
}

#[instrument]
fn cmd_config_init(force: bool) -> CliResult<()> {
    let path = global_config_path()
        .ok_or_else(|| CliError::Usage("cannot determine config directory".to_string()))?;
    Settings::write_template(&path, force)?;
    output::success(&mut io::stdout(), &format!("Created {}", path.display()))
        .with_context("write output")?;
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
