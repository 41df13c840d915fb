//! Mine command - list the stories you submitted.

use anyhow::Result;

use snooze_cli::app::Event;

use crate::cli::{print_view, Context, OutputFormat};

#[derive(clap::Args)]
pub struct Args {
    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let mut controller = ctx.start()?;
    controller.dispatch(Event::ShowOwnStories)?;
    print_view(controller.state(), args.format)
}
