//! Remote story server access.
//!
//! Provides the `StoryApi` trait the controller talks to and the blocking
//! HTTP implementation used by the CLI.
//!
//! # Submodules
//!
//! - `client` - HTTP client for the Hack-or-Snooze REST API

pub mod client;

pub use client::ApiClient;

use crate::models::{NewStory, Story, User};

/// Default story server URL.
pub const DEFAULT_API_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";

/// Custom error type for remote operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Username/password rejected by the server.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// HTTP request error.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The configured server URL cannot be used to build request paths.
    #[error("Invalid server URL {0}")]
    InvalidUrl(String),

    /// Server returned an error response.
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },
}

/// Operations the story server offers.
///
/// Every call is attempted exactly once; callers see failures as `ApiError`.
pub trait StoryApi {
    /// Creates an account and returns it with a fresh token.
    fn create_user(&self, username: &str, password: &str, name: &str) -> Result<User, ApiError>;

    /// Logs in and returns the account with a fresh token.
    fn authenticate(&self, username: &str, password: &str) -> Result<User, ApiError>;

    /// Looks up the user a stored session belongs to.
    ///
    /// An expired or unknown token yields `Ok(None)`, not an error.
    fn current_user(&self, token: &str, username: &str) -> Result<Option<User>, ApiError>;

    /// Fetches the current story list in server order.
    fn list_stories(&self) -> Result<Vec<Story>, ApiError>;

    /// Submits a story and returns the stored record.
    fn create_story(&self, token: &str, story: &NewStory) -> Result<Story, ApiError>;

    fn add_favorite(&self, token: &str, username: &str, story_id: &str) -> Result<(), ApiError>;

    fn remove_favorite(&self, token: &str, username: &str, story_id: &str)
        -> Result<(), ApiError>;
}
