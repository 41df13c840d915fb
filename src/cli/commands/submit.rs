//! Submit command - share a new story.

use anyhow::Result;
use colored::Colorize;

use snooze_cli::app::{AppError, Event};
use snooze_cli::models::NewStory;

use crate::cli::{print_view, Context, OutputFormat};

/// Arguments for the submit command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    snooze submit --title \"Ownership\" --url https://doc.rust-lang.org/book/ch04-00-understanding-ownership.html\n    \
    snooze submit -t \"Ownership\" -l doc.rust-lang.org -a \"Rust Book\"")]
pub struct Args {
    /// Story headline
    #[arg(short, long)]
    pub title: String,

    /// Link to the story
    #[arg(short = 'l', long)]
    pub url: String,

    /// Author credit (defaults to your display name)
    #[arg(short, long)]
    pub author: Option<String>,
}

pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let mut controller = ctx.start()?;

    let author = match (args.author, &controller.state().user) {
        (Some(author), _) => author,
        (None, Some(user)) => user.name.clone(),
        (None, None) => return Err(AppError::NotLoggedIn.into()),
    };

    controller.dispatch(Event::ToggleSubmitForm)?;
    controller.dispatch(Event::SubmitStory(NewStory {
        author,
        title: args.title,
        url: args.url,
    }))?;

    if let Some(notice) = &controller.state().notice {
        println!("{}", notice.message.green());
    }
    print_view(controller.state(), OutputFormat::Text)
}
