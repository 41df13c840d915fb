//! View-models: what a page shows, independent of how it is drawn.

use serde::Serialize;

use super::host_name;
use crate::app::{AppState, FormDrafts, Notice, Panel};
use crate::models::{Story, User};

/// Favorite star state for one story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StarIcon {
    /// Not a favorite (outlined star).
    #[serde(rename = "far")]
    Outlined,
    /// A favorite (filled star).
    #[serde(rename = "fas")]
    Filled,
}

impl StarIcon {
    /// Icon font class for the HTML page.
    pub fn css_class(self) -> &'static str {
        match self {
            StarIcon::Outlined => "far",
            StarIcon::Filled => "fas",
        }
    }

    /// Terminal glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            StarIcon::Outlined => "☆",
            StarIcon::Filled => "★",
        }
    }
}

/// Star to draw for a story given its favorite status.
pub fn favorite_marker(is_favorited: bool) -> StarIcon {
    if is_favorited {
        StarIcon::Filled
    } else {
        StarIcon::Outlined
    }
}

/// Navigation elements and whether each is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chrome {
    pub nav_login: bool,
    pub nav_logout: bool,
    /// Submit / favorites / my stories links
    pub main_nav: bool,
    /// Name shown in the navigation bar
    pub username: Option<String>,
}

impl Chrome {
    pub fn logged_in(username: &str) -> Self {
        Self {
            nav_login: false,
            nav_logout: true,
            main_nav: true,
            username: Some(username.to_string()),
        }
    }

    pub fn logged_out() -> Self {
        Self {
            nav_login: true,
            nav_logout: false,
            main_nav: false,
            username: None,
        }
    }

    pub fn for_user(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self::logged_in(&user.username),
            None => Self::logged_out(),
        }
    }
}

/// Visibility of every content region on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PanelVisibility {
    pub all_stories: bool,
    pub submit_form: bool,
    pub favorites: bool,
    pub own_stories: bool,
    pub login_form: bool,
    pub create_account_form: bool,
}

impl PanelVisibility {
    /// Every region hidden.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Reveals the regions that make up `panel`.
    ///
    /// The submit form sits above the story list; the login panel holds
    /// both the login and create-account forms.
    pub fn show(mut self, panel: Panel) -> Self {
        match panel {
            Panel::Stories => self.all_stories = true,
            Panel::SubmitForm => {
                self.submit_form = true;
                self.all_stories = true;
            }
            Panel::Favorites => self.favorites = true,
            Panel::OwnStories => self.own_stories = true,
            Panel::LoginForms => {
                self.login_form = true;
                self.create_account_form = true;
            }
        }
        self
    }

    /// Hides everything, then shows exactly `panel`.
    pub fn only(panel: Panel) -> Self {
        Self::hidden().show(panel)
    }
}

/// One story as it appears in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryView {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Link target, neutralised for script-bearing schemes
    pub href: String,
    pub author: String,
    pub username: String,
    pub host: String,
    /// `None` when nobody is logged in
    pub star: Option<StarIcon>,
    pub own: bool,
}

impl StoryView {
    pub fn new(story: &Story, user: Option<&User>) -> Self {
        Self {
            id: story.story_id.clone(),
            title: story.title.clone(),
            url: story.url.clone(),
            href: safe_href(&story.url).to_string(),
            author: story.author.clone(),
            username: story.username.clone(),
            host: host_name(&story.url).to_string(),
            star: user.map(|u| favorite_marker(u.is_favorite(&story.story_id))),
            own: user.is_some_and(|u| u.owns(&story.story_id)),
        }
    }
}

fn safe_href(url: &str) -> &str {
    let scheme = url
        .trim_start()
        .split_once(':')
        .map(|(scheme, _)| scheme.to_ascii_lowercase());
    match scheme.as_deref() {
        Some("javascript" | "data" | "vbscript") => "#",
        _ => url,
    }
}

/// Everything needed to draw one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub panel: Panel,
    pub chrome: Chrome,
    pub visible: PanelVisibility,
    pub notice: Option<Notice>,
    pub forms: FormDrafts,
    pub stories: Vec<StoryView>,
    pub favorites: Vec<StoryView>,
    pub own_stories: Vec<StoryView>,
}

impl PageView {
    pub fn from_state(state: &AppState) -> Self {
        let user = state.user.as_ref();
        let views = |stories: &[Story]| -> Vec<StoryView> {
            stories.iter().map(|s| StoryView::new(s, user)).collect()
        };

        Self {
            panel: state.panel,
            chrome: Chrome::for_user(user),
            visible: PanelVisibility::only(state.panel),
            notice: state.notice.clone(),
            forms: state.forms.clone(),
            stories: views(state.stories.as_slice()),
            favorites: user.map(|u| views(&u.favorites)).unwrap_or_default(),
            own_stories: user.map(|u| views(&u.stories)).unwrap_or_default(),
        }
    }

    /// The stories shown by the active panel.
    pub fn current_list(&self) -> &[StoryView] {
        match self.panel {
            Panel::Stories | Panel::SubmitForm => &self.stories,
            Panel::Favorites => &self.favorites,
            Panel::OwnStories => &self.own_stories,
            Panel::LoginForms => &[],
        }
    }
}
