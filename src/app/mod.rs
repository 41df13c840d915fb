//! Interaction control.
//!
//! `Controller` turns user events into remote calls, session updates and
//! state transitions. `state` holds the pure half: the state container and
//! the function that advances it.

pub mod controller;
pub mod state;

pub use controller::{Controller, Event};
pub use state::{reduce, AppState, FormDrafts, Notice, NoticeLevel, Panel, Transition};

use crate::api::ApiError;
use crate::session::SessionError;

/// Why a user action did not go through.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// A required form field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The action needs a logged-in user.
    #[error("You need to log in first")]
    NotLoggedIn,

    #[error("No story with id '{0}'")]
    UnknownStory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        assert_eq!(
            AppError::MissingField("Username").to_string(),
            "Username is required"
        );
    }

    #[test]
    fn test_api_error_is_transparent() {
        let err = AppError::from(ApiError::InvalidCredentials("Invalid password".to_string()));
        assert_eq!(err.to_string(), "Invalid credentials: Invalid password");
    }
}
