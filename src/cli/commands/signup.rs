//! Signup command - create an account and log in.

use anyhow::{bail, Context as _, Result};
use colored::Colorize;

use snooze_cli::app::Event;

use super::login::prompt;
use crate::cli::{print_view, Context, OutputFormat};

/// Arguments for the signup command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    snooze signup                          Prompt for every field\n    \
    snooze signup -n \"Ada L\" -u ada        Prompt for the password only")]
pub struct Args {
    /// Display name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Account username
    #[arg(short, long)]
    pub username: Option<String>,
}

pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let mut controller = ctx.start()?;

    if let Some(user) = &controller.state().user {
        println!("Already logged in as {}", user.username.cyan());
        println!("Run 'snooze logout' first to create another account.");
        return Ok(());
    }

    let name = match args.name {
        Some(name) => name,
        None => prompt("Name: ")?,
    };
    let username = match args.username {
        Some(username) => username,
        None => prompt("Username: ")?,
    };

    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;
    let confirm =
        rpassword::prompt_password("Confirm password: ").context("Failed to read password")?;
    if password != confirm {
        bail!("Passwords do not match");
    }

    controller.dispatch(Event::Signup {
        name,
        username,
        password,
    })?;

    println!("{}", "Account created!".green().bold());
    print_view(controller.state(), OutputFormat::Text)
}
