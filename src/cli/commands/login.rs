//! Login command - authenticate with the story server.
//!
//! Prompts for any credential not given on the command line and saves
//! the resulting session for later commands.

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::io::{self, Write};

use snooze_cli::app::Event;

use crate::cli::{print_view, Context, OutputFormat};

/// Arguments for the login command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    snooze login                 Prompt for username and password\n    \
    snooze login -u ada          Prompt for the password only")]
pub struct Args {
    /// Account username
    #[arg(short, long)]
    pub username: Option<String>,
}

/// Executes the login command.
pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let mut controller = ctx.start()?;

    if let Some(user) = &controller.state().user {
        println!("Already logged in as {}", user.username.cyan());
        println!("Run 'snooze logout' first to log out.");
        return Ok(());
    }

    let username = match args.username {
        Some(username) => username,
        None => prompt("Username: ")?,
    };
    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;

    controller.dispatch(Event::Login { username, password })?;

    println!("{}", "Success!".green().bold());
    print_view(controller.state(), OutputFormat::Text)
}

/// Reads one visible line from stdin.
pub(crate) fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}
