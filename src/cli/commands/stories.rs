//! Stories command - list every story on the server.

use anyhow::Result;

use crate::cli::{print_view, Context, OutputFormat};

/// Arguments for the stories command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    snooze stories                 List the latest stories\n    \
    snooze stories --format json   Output as JSON")]
pub struct Args {
    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the stories command.
pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let controller = ctx.start()?;
    print_view(controller.state(), args.format)
}
