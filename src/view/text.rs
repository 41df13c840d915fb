//! Terminal rendering.

use colored::Colorize;

use super::model::{PageView, StoryView};
use crate::app::{Notice, NoticeLevel, Panel};

/// One story as a two-line list entry.
pub fn story_lines(index: usize, story: &StoryView) -> String {
    let star = story.star.map(|s| s.glyph()).unwrap_or(" ");
    let mine = if story.own {
        format!(" {}", "[mine]".green())
    } else {
        String::new()
    };

    format!(
        "{:>3}. {} {} {}{}\n       by {} | posted by {} | {}",
        index + 1,
        star.yellow(),
        story.title.bold(),
        format!("({})", story.host).dimmed(),
        mine,
        story.author,
        story.username.cyan(),
        story.id.dimmed(),
    )
}

pub fn notice_line(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Info => notice.message.green().to_string(),
        NoticeLevel::Error => format!("{} {}", "Error:".red().bold(), notice.message),
    }
}

fn heading(panel: Panel) -> &'static str {
    match panel {
        Panel::Stories | Panel::SubmitForm => "Stories",
        Panel::Favorites => "Favorites",
        Panel::OwnStories => "My stories",
        Panel::LoginForms => "Login / create account",
    }
}

fn empty_message(panel: Panel) -> &'static str {
    match panel {
        Panel::Favorites => "No favorites added!",
        Panel::OwnStories => "No stories added by user yet!",
        _ => "No stories found.",
    }
}

/// The active panel of a page, ready to print.
pub fn render_page(page: &PageView) -> String {
    let mut out = Vec::new();

    let who = match &page.chrome.username {
        Some(name) => format!("logged in as {}", name.cyan()),
        None => "not logged in".dimmed().to_string(),
    };
    out.push(format!("{} {}", heading(page.panel).bold(), format!("({who})").dimmed()));

    if let Some(notice) = &page.notice {
        out.push(notice_line(notice));
    }
    out.push(String::new());

    if page.panel == Panel::LoginForms {
        out.push("Run 'snooze login' or 'snooze signup' to continue.".to_string());
        return out.join("\n");
    }

    let list = page.current_list();
    if list.is_empty() {
        out.push(empty_message(page.panel).dimmed().to_string());
    }
    for (index, story) in list.iter().enumerate() {
        out.push(story_lines(index, story));
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{reduce, AppState, Transition};
    use crate::models::{Story, User};
    use crate::stories::StoryCollection;

    fn story(id: &str) -> Story {
        Story {
            story_id: id.to_string(),
            title: format!("Story {id}"),
            url: "https://www.example.com/x".to_string(),
            author: "Ada".to_string(),
            username: "ada".to_string(),
            created_at: None,
        }
    }

    fn page_for(user: Option<User>, panel: Panel) -> PageView {
        let state = reduce(
            AppState::default(),
            Transition::Loaded {
                user,
                stories: StoryCollection::new(vec![story("a")]),
            },
        );
        PageView::from_state(&reduce(state, Transition::ShowPanel(panel)))
    }

    #[test]
    fn test_story_lines_contents() {
        let view = StoryView::new(&story("a"), None);
        let text = story_lines(0, &view);
        assert!(text.contains("1."));
        assert!(text.contains("Story a"));
        assert!(text.contains("example.com"));
        assert!(!text.contains('★'));
    }

    #[test]
    fn test_render_page_lists_stories() {
        let text = render_page(&page_for(None, Panel::Stories));
        assert!(text.contains("Stories"));
        assert!(text.contains("Story a"));
    }

    #[test]
    fn test_render_empty_favorites() {
        let user = User {
            username: "ada".to_string(),
            name: "Ada".to_string(),
            login_token: "tok".to_string(),
            stories: vec![],
            favorites: vec![],
            created_at: None,
        };
        let text = render_page(&page_for(Some(user), Panel::Favorites));
        assert!(text.contains("No favorites added!"));
    }

    #[test]
    fn test_error_notice_line() {
        let line = notice_line(&Notice::error("boom"));
        assert!(line.contains("Error:"));
        assert!(line.contains("boom"));
    }
}
