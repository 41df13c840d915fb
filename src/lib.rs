//! snooze - a Hack-or-Snooze story client
//!
//! Restores a saved session, fetches the story list and the current user,
//! applies one user action, and renders the result as a terminal listing
//! or a standalone HTML page.

pub mod api;
pub mod app;
pub mod config;
pub mod models;
pub mod session;
pub mod stories;
pub mod view;
