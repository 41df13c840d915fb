//! Logout command - forget the saved session.
//!
//! The session is removed before anything is fetched, so logging out works
//! even when the server is unreachable.

use anyhow::{Context as _, Result};
use colored::Colorize;

use snooze_cli::app::Event;

use crate::cli::{print_view, Context, OutputFormat};

/// Arguments for the logout command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    snooze logout                Log out and show the public story list")]
pub struct Args {}

/// Executes the logout command.
pub fn run(_args: Args, ctx: &Context) -> Result<()> {
    let mut controller = ctx.controller()?;

    let session = controller.session().restore().unwrap_or_else(|e| {
        tracing::warn!("Could not read saved session: {e}");
        None
    });
    let Some(session) = session else {
        // Sweep up anything unreadable that was left behind.
        controller
            .session()
            .clear()
            .context("Failed to remove saved session")?;
        println!("{}", "Not currently logged in.".yellow());
        return Ok(());
    };

    if let Err(e) = controller.dispatch(Event::Logout) {
        // The session is already gone; only the reload failed.
        tracing::debug!("Could not reload stories after logout: {e}");
        println!("Logged out {}", session.username.cyan());
        return Ok(());
    }

    println!("Logged out {}", session.username.cyan());
    println!();
    print_view(controller.state(), OutputFormat::Text)
}
