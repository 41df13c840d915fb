//! Favorite command - toggle a story in your favorites.

use anyhow::Result;
use colored::Colorize;

use snooze_cli::app::Event;
use snooze_cli::view::favorite_marker;

use crate::cli::Context;

/// Arguments for the favorite command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    snooze favorite 5081e46e-3143-4c0c-bbf4-c22eb11eb3f5\n\n\
    Story ids are shown under each entry of 'snooze stories'.")]
pub struct Args {
    /// Id of the story to favorite or unfavorite
    #[arg(value_name = "STORY_ID")]
    pub story_id: String,
}

pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let mut controller = ctx.start()?;

    controller.dispatch(Event::ToggleFavorite {
        story_id: args.story_id.clone(),
    })?;

    let state = controller.state();
    let favorited = state.is_favorite(&args.story_id);
    let title = state
        .find_story(&args.story_id)
        .map(|s| s.title.as_str())
        .unwrap_or(args.story_id.as_str());
    let star = favorite_marker(favorited).glyph().yellow();

    if favorited {
        println!("{star} Added {} to favorites", title.bold());
    } else {
        println!("{star} Removed {} from favorites", title.bold());
    }
    Ok(())
}
