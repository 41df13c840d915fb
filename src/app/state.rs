//! Application state and its transitions.
//!
//! `AppState` is the single container for everything a page shows: the
//! current user, the story list, which panel is open, what the forms hold,
//! and the last notice. It only changes through [`reduce`].

use serde::Serialize;

use crate::models::{NewStory, Story, User};
use crate::stories::StoryCollection;

/// The logical view currently on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Panel {
    #[default]
    Stories,
    SubmitForm,
    Favorites,
    OwnStories,
    LoginForms,
}

/// Values typed into the forms but not yet accepted by the server.
///
/// Passwords are never kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormDrafts {
    pub login_username: String,
    pub signup_name: String,
    pub signup_username: String,
    pub story: NewStory,
}

impl FormDrafts {
    fn reset_auth(&mut self) {
        self.login_username.clear();
        self.signup_name.clear();
        self.signup_username.clear();
    }

    fn reset_story(&mut self) {
        self.story = NewStory::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A one-line message shown above the panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub user: Option<User>,
    pub stories: StoryCollection,
    pub panel: Panel,
    pub forms: FormDrafts,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Favorite membership from the authoritative in-memory set.
    pub fn is_favorite(&self, story_id: &str) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_favorite(story_id))
    }

    /// Finds a story the user can act on, wherever it is listed.
    pub fn find_story(&self, story_id: &str) -> Option<&Story> {
        self.stories.get(story_id).or_else(|| {
            self.user.as_ref().and_then(|u| {
                u.stories
                    .iter()
                    .chain(u.favorites.iter())
                    .find(|s| s.story_id == story_id)
            })
        })
    }
}

/// Everything that can happen to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Page load finished: identity and list fetched.
    Loaded {
        user: Option<User>,
        stories: StoryCollection,
    },
    StoriesRefreshed(StoryCollection),
    LoggedIn(User),
    ShowPanel(Panel),
    LoginDrafted {
        username: String,
    },
    SignupDrafted {
        name: String,
        username: String,
    },
    StoryDrafted(NewStory),
    StorySubmitted(Story),
    FavoriteAdded(Story),
    FavoriteRemoved {
        story_id: String,
    },
    Failed(String),
}

/// Applies one transition, returning the next state.
pub fn reduce(mut state: AppState, transition: Transition) -> AppState {
    match transition {
        Transition::Loaded { user, stories } => AppState {
            user,
            stories,
            ..AppState::default()
        },
        Transition::StoriesRefreshed(stories) => {
            state.stories = stories;
            state.panel = Panel::Stories;
            state.notice = None;
            state
        }
        Transition::LoggedIn(user) => {
            state.notice = Some(Notice::info(format!("Logged in as {}", user.username)));
            state.user = Some(user);
            state.forms.reset_auth();
            state.panel = Panel::Stories;
            state
        }
        Transition::ShowPanel(panel) => {
            state.panel = panel;
            state.notice = None;
            state
        }
        Transition::LoginDrafted { username } => {
            state.forms.login_username = username;
            state
        }
        Transition::SignupDrafted { name, username } => {
            state.forms.signup_name = name;
            state.forms.signup_username = username;
            state
        }
        Transition::StoryDrafted(story) => {
            state.forms.story = story;
            state
        }
        Transition::StorySubmitted(story) => {
            state.notice = Some(Notice::info(format!("Submitted \"{}\"", story.title)));
            if let Some(user) = state.user.as_mut() {
                user.stories.push(story.clone());
            }
            state.stories.append(story);
            state.forms.reset_story();
            state.panel = Panel::Stories;
            state
        }
        Transition::FavoriteAdded(story) => {
            if let Some(user) = state.user.as_mut() {
                if !user.is_favorite(&story.story_id) {
                    user.favorites.push(story);
                }
            }
            state.notice = None;
            state
        }
        Transition::FavoriteRemoved { story_id } => {
            if let Some(user) = state.user.as_mut() {
                user.favorites.retain(|s| s.story_id != story_id);
            }
            state.notice = None;
            state
        }
        Transition::Failed(message) => {
            state.notice = Some(Notice::error(message));
            state
        }
    }
}
