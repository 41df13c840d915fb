//! Completions command - generate shell completion scripts.
//!
//! Generates shell completion scripts for various shells that can be
//! installed to enable tab-completion of snooze commands and options.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    snooze completions bash > ~/.local/share/bash-completion/completions/snooze\n    \
    snooze completions zsh > ~/.zfunc/_snooze\n    \
    snooze completions fish > ~/.config/fish/completions/snooze.fish")]
pub struct Args {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Generates completions using a provided clap Command.
///
/// Called from main.rs, which has access to the Cli struct.
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    generate(shell, cmd, "snooze", &mut io::stdout());
}
