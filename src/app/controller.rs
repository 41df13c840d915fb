//! Event handling.
//!
//! Each handler validates its inputs, makes at most the remote calls it
//! needs, updates the session store, and advances the state through
//! [`reduce`]. Nothing here looks at rendered output.

use crate::api::StoryApi;
use crate::models::NewStory;
use crate::session::SessionStore;
use crate::stories::StoryCollection;

use super::state::{reduce, AppState, Panel, Transition};
use super::AppError;

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Login {
        username: String,
        password: String,
    },
    Signup {
        name: String,
        username: String,
        password: String,
    },
    Logout,
    SubmitStory(NewStory),
    ToggleFavorite {
        story_id: String,
    },
    /// Refetches the list and shows it.
    ShowAllStories,
    ShowFavorites,
    ShowOwnStories,
    ShowLoginForms,
    ToggleSubmitForm,
}

/// Owns the remote client, the session store and the page state.
pub struct Controller<A> {
    api: A,
    session: SessionStore,
    state: AppState,
}

impl<A: StoryApi> Controller<A> {
    pub fn new(api: A, session: SessionStore) -> Self {
        Self {
            api,
            session,
            state: AppState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn apply(&mut self, transition: Transition) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, transition);
    }

    /// Page load: restore the session, fetch the user and the story list.
    ///
    /// A stored session the server no longer accepts is treated as logged
    /// out.
    pub fn start(&mut self) -> Result<(), AppError> {
        let user = match self.session.restore()? {
            Some(session) => {
                let user = self.api.current_user(&session.token, &session.username)?;
                if user.is_none() {
                    tracing::debug!(
                        username = %session.username,
                        "stored session is no longer valid"
                    );
                }
                user
            }
            None => None,
        };

        let mut stories = StoryCollection::default();
        stories.refresh(&self.api)?;

        self.apply(Transition::Loaded { user, stories });
        Ok(())
    }

    /// Runs one event. A failure is recorded as an error notice and returned.
    pub fn dispatch(&mut self, event: Event) -> Result<(), AppError> {
        let result = match event {
            Event::Login { username, password } => self.login(username, password),
            Event::Signup {
                name,
                username,
                password,
            } => self.signup(name, username, password),
            Event::Logout => self.logout(),
            Event::SubmitStory(story) => self.submit_story(story),
            Event::ToggleFavorite { story_id } => self.toggle_favorite(&story_id),
            Event::ShowAllStories => self.show_all_stories(),
            Event::ShowFavorites => self.show_for_user(Panel::Favorites),
            Event::ShowOwnStories => self.show_for_user(Panel::OwnStories),
            Event::ShowLoginForms => {
                self.toggle_panel(Panel::LoginForms);
                Ok(())
            }
            Event::ToggleSubmitForm => {
                self.require_login()?;
                self.toggle_panel(Panel::SubmitForm);
                Ok(())
            }
        };

        if let Err(err) = &result {
            tracing::warn!("{err}");
            self.apply(Transition::Failed(err.to_string()));
        }
        result
    }

    fn login(&mut self, username: String, password: String) -> Result<(), AppError> {
        self.apply(Transition::LoginDrafted {
            username: username.clone(),
        });
        let username = required(&username, "Username")?;
        let password = required(&password, "Password")?;

        let user = self.api.authenticate(username, password)?;
        self.session.save(Some(&user))?;
        tracing::info!(username = %user.username, "logged in");
        self.apply(Transition::LoggedIn(user));
        Ok(())
    }

    fn signup(&mut self, name: String, username: String, password: String) -> Result<(), AppError> {
        self.apply(Transition::SignupDrafted {
            name: name.clone(),
            username: username.clone(),
        });
        let name = required(&name, "Name")?;
        let username = required(&username, "Username")?;
        let password = required(&password, "Password")?;

        let user = self.api.create_user(username, password, name)?;
        self.session.save(Some(&user))?;
        tracing::info!(username = %user.username, "account created");
        self.apply(Transition::LoggedIn(user));
        Ok(())
    }

    /// Clears the session and reloads from scratch.
    fn logout(&mut self) -> Result<(), AppError> {
        self.session.clear()?;
        self.state = AppState::default();
        tracing::info!("logged out");
        self.start()
    }

    fn submit_story(&mut self, story: NewStory) -> Result<(), AppError> {
        let (token, _) = self.require_login()?;
        self.apply(Transition::StoryDrafted(story.clone()));
        required(&story.author, "Author")?;
        required(&story.title, "Title")?;
        required(&story.url, "URL")?;

        let created = self.api.create_story(&token, &story)?;
        tracing::debug!(story_id = %created.story_id, "story submitted");
        self.apply(Transition::StorySubmitted(created));
        Ok(())
    }

    /// Flips favorite membership based on the in-memory favorite set.
    fn toggle_favorite(&mut self, story_id: &str) -> Result<(), AppError> {
        let (token, username) = self.require_login()?;
        let story = self
            .state
            .find_story(story_id)
            .cloned()
            .ok_or_else(|| AppError::UnknownStory(story_id.to_string()))?;

        if self.state.is_favorite(story_id) {
            self.api.remove_favorite(&token, &username, story_id)?;
            tracing::debug!(story_id, "favorite removed");
            self.apply(Transition::FavoriteRemoved {
                story_id: story_id.to_string(),
            });
        } else {
            self.api.add_favorite(&token, &username, story_id)?;
            tracing::debug!(story_id, "favorite added");
            self.apply(Transition::FavoriteAdded(story));
        }
        Ok(())
    }

    fn show_all_stories(&mut self) -> Result<(), AppError> {
        let mut stories = StoryCollection::default();
        stories.refresh(&self.api)?;
        self.apply(Transition::StoriesRefreshed(stories));
        Ok(())
    }

    fn show_for_user(&mut self, panel: Panel) -> Result<(), AppError> {
        self.require_login()?;
        self.apply(Transition::ShowPanel(panel));
        Ok(())
    }

    /// Opens `panel`, or returns to the story list if it is already open.
    fn toggle_panel(&mut self, panel: Panel) {
        let next = if self.state.panel == panel {
            Panel::Stories
        } else {
            panel
        };
        self.apply(Transition::ShowPanel(next));
    }

    /// Token and username of the current user.
    fn require_login(&self) -> Result<(String, String), AppError> {
        self.state
            .user
            .as_ref()
            .map(|u| (u.login_token.clone(), u.username.clone()))
            .ok_or(AppError::NotLoggedIn)
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, AppError> {
    if value.trim().is_empty() {
        Err(AppError::MissingField(field))
    } else {
        Ok(value)
    }
}
