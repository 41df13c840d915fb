//! Command-line interface for snooze.
//!
//! Every command is one page load: restore the session, fetch the user and
//! the stories, apply one action, print the resulting view.

/// Individual CLI command implementations.
pub mod commands;

mod context;
mod format;

pub use context::{print_view, Context};
pub use format::OutputFormat;
