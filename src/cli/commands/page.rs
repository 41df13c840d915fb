//! Page command - render the site as one HTML document.
//!
//! Produces the same page a browser client would show for the chosen view,
//! with navigation, forms and lists toggled for the current login state.

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use std::fs;
use std::path::PathBuf;

use snooze_cli::app::Event;
use snooze_cli::config;
use snooze_cli::view::{HtmlRenderer, PageView};

use crate::cli::Context;

/// Which panel the rendered page opens on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PanelArg {
    /// All stories (default)
    #[default]
    Stories,
    /// Story submission form above the list
    Submit,
    /// Your favorites
    Favorites,
    /// Stories you submitted
    Mine,
    /// Login and create-account forms
    Login,
}

impl PanelArg {
    /// The navigation click that opens this panel, if any.
    fn event(self) -> Option<Event> {
        match self {
            PanelArg::Stories => None,
            PanelArg::Submit => Some(Event::ToggleSubmitForm),
            PanelArg::Favorites => Some(Event::ShowFavorites),
            PanelArg::Mine => Some(Event::ShowOwnStories),
            PanelArg::Login => Some(Event::ShowLoginForms),
        }
    }
}

/// Arguments for the page command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    snooze page > index.html             Write the story list page\n    \
    snooze page --panel favorites -o fav.html\n    \
    snooze page --open                   Open the page in a browser")]
pub struct Args {
    /// Panel to show
    #[arg(short, long, value_enum, default_value = "stories")]
    pub panel: PanelArg,

    /// Write the page to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Open the rendered page in the default browser
    #[arg(long)]
    pub open: bool,
}

pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let mut controller = ctx.start()?;

    if let Some(event) = args.panel.event() {
        // A refused action still renders, with the error shown on the page.
        if let Err(e) = controller.dispatch(event) {
            tracing::debug!("panel not available: {e}");
        }
    }

    let renderer = HtmlRenderer::new().context("Failed to load page templates")?;
    let html = renderer
        .render_page(&PageView::from_state(controller.state()))
        .context("Failed to render page")?;

    let output = match (args.output, args.open) {
        (Some(path), _) => Some(path),
        (None, true) => Some(config::snooze_dir()?.join("page.html")),
        (None, false) => None,
    };

    let Some(path) = output else {
        print!("{html}");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create output directory")?;
    }
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());

    if args.open {
        if let Err(e) = webbrowser::open(&path.to_string_lossy()) {
            eprintln!("Failed to open browser: {e}");
            println!("Please open the file above manually.");
        }
    }

    Ok(())
}
