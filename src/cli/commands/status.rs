//! Status command - show the configured server and current login.

use anyhow::{Context as _, Result};
use colored::Colorize;

use snooze_cli::api::StoryApi;
use snooze_cli::config::Config;

use crate::cli::Context;

/// Arguments for the status command.
#[derive(clap::Args)]
pub struct Args {
    /// Only report the saved session, without contacting the server
    #[arg(long)]
    pub offline: bool,
}

/// Executes the status command.
///
/// Shows the server URL, where the session is kept, and whether the saved
/// session is still accepted by the server.
pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let controller = ctx.controller()?;

    println!("{}", "snooze".bold().cyan());
    println!();
    println!("  {}  {}", "Server: ".dimmed(), controller.api().base_url());
    println!("  {}  {}", "Session:".dimmed(), controller.session().location());
    println!(
        "  {}  {}",
        "Keyring:".dimmed(),
        if config.use_keyring { "on" } else { "off" }
    );
    println!();

    let Some(session) = controller
        .session()
        .restore()
        .context("Failed to check login status")?
    else {
        println!("{}", "Not logged in.".yellow());
        println!("Run 'snooze login' or 'snooze signup' to get started.");
        return Ok(());
    };

    if args.offline {
        println!("Saved session for {}", session.username.cyan());
        return Ok(());
    }

    match controller
        .api()
        .current_user(&session.token, &session.username)?
    {
        Some(user) => {
            println!(
                "Logged in as {} ({})",
                user.username.cyan(),
                user.name
            );
            println!(
                "  {} stories submitted, {} favorites",
                user.stories.len(),
                user.favorites.len()
            );
        }
        None => {
            println!(
                "{}",
                format!("Saved session for {} has expired.", session.username).yellow()
            );
            println!("Run 'snooze login' to log in again.");
        }
    }

    Ok(())
}
