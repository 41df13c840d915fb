//! HTML rendering.
//!
//! Templates are compiled into the binary and rendered with HTML
//! auto-escaping, so story fields can never inject markup.

use minijinja::{context, Environment};

use super::model::{PageView, StoryView};

const STORY_TEMPLATE: &str = "story.html";
const PAGE_TEMPLATE: &str = "page.html";

pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(STORY_TEMPLATE, include_str!("templates/story.html"))?;
        env.add_template(PAGE_TEMPLATE, include_str!("templates/page.html"))?;
        Ok(Self { env })
    }

    /// Markup for one story list item, tagged with the story id.
    pub fn render_story(&self, story: &StoryView) -> Result<String, minijinja::Error> {
        self.env
            .get_template(STORY_TEMPLATE)?
            .render(context! { story => story })
    }

    /// The full page for the given view.
    pub fn render_page(&self, page: &PageView) -> Result<String, minijinja::Error> {
        self.env.get_template(PAGE_TEMPLATE)?.render(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{reduce, AppState, Notice, Panel, Transition};
    use crate::models::{Story, User};
    use crate::stories::StoryCollection;

    fn story(id: &str, title: &str) -> Story {
        Story {
            story_id: id.to_string(),
            title: title.to_string(),
            url: "https://www.example.com/post".to_string(),
            author: "Ada".to_string(),
            username: "ada".to_string(),
            created_at: None,
        }
    }

    fn user() -> User {
        User {
            username: "ada".to_string(),
            name: "Ada".to_string(),
            login_token: "tok".to_string(),
            stories: vec![],
            favorites: vec![story("fav", "Liked")],
            created_at: None,
        }
    }

    fn loaded(user: Option<User>) -> AppState {
        reduce(
            AppState::default(),
            Transition::Loaded {
                user,
                stories: StoryCollection::new(vec![story("fav", "Liked"), story("other", "Other")]),
            },
        )
    }

    #[test]
    fn test_render_story_fragment() {
        let renderer = HtmlRenderer::new().unwrap();
        let view = StoryView::new(&story("abc-1", "Hello"), Some(&user()));

        let html = renderer.render_story(&view).unwrap();
        assert!(html.starts_with(r#"<li id="abc-1">"#));
        assert!(html.contains(r#"<i class="far fa-star"></i>"#));
        assert!(html.contains("<strong>Hello</strong>"));
        assert!(html.contains("(example.com)"));
        assert!(html.contains("posted by ada"));
    }

    #[test]
    fn test_render_story_escapes_fields() {
        let renderer = HtmlRenderer::new().unwrap();
        let view = StoryView::new(&story("x", "<script>alert(1)</script>"), None);

        let html = renderer.render_story(&view).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("fa-star"));
    }

    #[test]
    fn test_render_page_logged_out() {
        let renderer = HtmlRenderer::new().unwrap();
        let page = PageView::from_state(&loaded(None));

        let html = renderer.render_page(&page).unwrap();
        assert!(html.contains(r#"id="nav-login">"#));
        assert!(html.contains(r#"id="nav-logout" hidden>"#));
        assert!(html.contains(r#"class="main-nav-links" hidden>"#));
        assert!(html.contains(r#"<ol id="all-articles-list" class="articles-list">"#));
        assert!(html.contains(r#"<li id="other">"#));
    }

    #[test]
    fn test_render_page_marks_favorites() {
        let renderer = HtmlRenderer::new().unwrap();
        let page = PageView::from_state(&loaded(Some(user())));

        let html = renderer.render_page(&page).unwrap();
        assert!(html.contains(r#"id="nav-login" hidden>"#));
        assert!(html.contains(r#"<i class="fas fa-star"></i>"#));
        assert!(html.contains(r#"<i class="far fa-star"></i>"#));
    }

    #[test]
    fn test_render_page_shows_error_notice() {
        let renderer = HtmlRenderer::new().unwrap();
        let state = reduce(loaded(None), Transition::ShowPanel(Panel::LoginForms));
        let mut page = PageView::from_state(&state);
        page.notice = Some(Notice::error("Invalid credentials"));

        let html = renderer.render_page(&page).unwrap();
        assert!(html.contains(r#"class="notice notice-error""#));
        assert!(html.contains("Invalid credentials"));
        assert!(html.contains(r##"<form action="#" id="login-form">"##));
        assert!(html.contains(r#"id="all-articles-list" class="articles-list" hidden>"#));
    }
}
