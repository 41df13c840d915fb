//! Config command - manage configuration

use anyhow::{bail, Result};
use clap::Subcommand;
use colored::Colorize;

use snooze_cli::config::{self, Config, CONFIG_KEYS};

#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    snooze config                                  Show all settings\n    \
    snooze config get api_url                      Print one setting\n    \
    snooze config set api_url http://localhost:5000\n    \
    snooze config set use_keyring true")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(ConfigCommand::Show) | None => show_config(),
        Some(ConfigCommand::Get { key }) => get_config(&key),
        Some(ConfigCommand::Set { key, value }) => set_config(&key, &value),
    }
}

fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "snooze configuration".bold());
    println!();
    println!("  {}  {}", "Config file:".dimmed(), Config::config_path()?.display());
    println!("  {}  {}", "Session:    ".dimmed(), config::session_path()?.display());
    println!();

    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("  {} = {}", key.cyan(), value);
    }

    Ok(())
}

fn get_config(key: &str) -> Result<()> {
    let config = Config::load()?;
    match config.get(key) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => bail!(
            "Unknown config key '{key}'. Valid keys: {}",
            CONFIG_KEYS.join(", ")
        ),
    }
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("{} {} = {}", "Set".green(), key, config.get(key).unwrap_or_default());
    Ok(())
}
