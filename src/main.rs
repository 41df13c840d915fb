use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::commands;
use cli::Context;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "snooze")]
#[command(version)]
#[command(about = "Read, submit and favorite stories on a Hack-or-Snooze server")]
#[command(long_about = "snooze is a terminal client for Hack-or-Snooze story servers.\n\
    It keeps you logged in between runs, lists and submits stories,\n\
    manages favorites, and can render the whole site as an HTML page.")]
#[command(after_help = "EXAMPLES:\n    \
    snooze stories               List the latest stories\n    \
    snooze login -u ada          Log in (prompts for the password)\n    \
    snooze favorite <ID>         Add or remove a favorite\n    \
    snooze submit --title T --url U\n                                 Share a link\n    \
    snooze page --open           Render the site and open it in a browser\n\n\
    For more information about a command, run 'snooze <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Story server URL (overrides the configured one)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List all stories
    Stories(commands::stories::Args),

    /// Log in to an existing account
    #[command(long_about = "Authenticates with the story server and saves the session\n\
        so later commands run as this user.")]
    Login(commands::login::Args),

    /// Create an account and log in
    Signup(commands::signup::Args),

    /// Forget the saved session
    Logout(commands::logout::Args),

    /// Submit a new story
    Submit(commands::submit::Args),

    /// Add a story to your favorites, or remove it if already there
    Favorite(commands::favorite::Args),

    /// List your favorite stories
    Favorites(commands::favorites::Args),

    /// List the stories you submitted
    Mine(commands::mine::Args),

    /// Render the site as a standalone HTML page
    #[command(long_about = "Renders the current view (story list, favorites, your stories,\n\
        submit form or login forms) as a single HTML page. The page is\n\
        written to stdout, to a file with --output, or opened in a browser\n\
        with --open.")]
    Page(commands::page::Args),

    /// Show the configured server and who is logged in
    Status(commands::status::Args),

    /// View and manage configuration settings
    #[command(long_about = "Provides subcommands to show, get, and set configuration values.\n\
        Configuration is stored in ~/.snooze/config.yaml.")]
    Config(commands::config::Args),

    /// Generate shell completion scripts
    Completions(commands::completions::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "snooze=debug,snooze_cli=debug"
    } else {
        "snooze=info,snooze_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let ctx = Context::new(cli.api_url);

    match cli.command {
        Commands::Stories(args) => commands::stories::run(args, &ctx),
        Commands::Login(args) => commands::login::run(args, &ctx),
        Commands::Signup(args) => commands::signup::run(args, &ctx),
        Commands::Logout(args) => commands::logout::run(args, &ctx),
        Commands::Submit(args) => commands::submit::run(args, &ctx),
        Commands::Favorite(args) => commands::favorite::run(args, &ctx),
        Commands::Favorites(args) => commands::favorites::run(args, &ctx),
        Commands::Mine(args) => commands::mine::run(args, &ctx),
        Commands::Page(args) => commands::page::run(args, &ctx),
        Commands::Status(args) => commands::status::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args),
        Commands::Completions(args) => {
            commands::completions::generate_completions(&mut Cli::command(), args.shell);
            Ok(())
        }
    }
}
