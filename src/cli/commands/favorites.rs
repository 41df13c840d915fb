//! Favorites command - list the stories you bookmarked.

use anyhow::Result;

use snooze_cli::app::Event;

use crate::cli::{print_view, Context, OutputFormat};

/// Arguments for the favorites command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    snooze favorites                 List your favorites\n    \
    snooze favorites --format json   Output as JSON")]
pub struct Args {
    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let mut controller = ctx.start()?;
    controller.dispatch(Event::ShowFavorites)?;
    print_view(controller.state(), args.format)
}
