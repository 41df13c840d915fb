//! CLI commands for snooze.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Shell completion scripts.
pub mod completions;

/// Configuration viewing and management.
pub mod config;

/// Toggle one story in the user's favorites.
pub mod favorite;

/// List the user's favorites.
pub mod favorites;

/// Log in to an existing account.
pub mod login;

/// Forget the saved session.
pub mod logout;

/// List the user's own stories.
pub mod mine;

/// Render the site as an HTML page.
pub mod page;

/// Create an account.
pub mod signup;

/// Show server and login status.
pub mod status;

/// List all stories.
pub mod stories;

/// Submit a new story.
pub mod submit;
