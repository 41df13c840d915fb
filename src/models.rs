//! Core data models for snooze
//!
//! These mirror the records exchanged with the story server. Field names
//! follow Rust conventions; the camelCase wire names are handled by serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shared link record.
///
/// Stories are immutable once the server has accepted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Server-assigned identifier
    pub story_id: String,

    /// Headline shown in lists
    pub title: String,

    /// Link target
    pub url: String,

    /// Free-form author credit entered at submission
    pub author: String,

    /// Account that submitted the story
    pub username: String,

    /// When the server accepted the story
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields a user fills in when submitting a story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStory {
    pub author: String,
    pub title: String,
    pub url: String,
}

/// The authenticated identity for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account name, also the lookup key on the server
    pub username: String,

    /// Display name
    pub name: String,

    /// Opaque credential. Delivered beside the user record, never inside it.
    #[serde(skip)]
    pub login_token: String,

    /// Stories this user submitted, in server order
    #[serde(default)]
    pub stories: Vec<Story>,

    /// Stories this user bookmarked
    #[serde(default)]
    pub favorites: Vec<Story>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Attaches the session token that accompanied this record.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.login_token = token.into();
        self
    }

    /// Whether the story with this id is in the user's favorite set.
    pub fn is_favorite(&self, story_id: &str) -> bool {
        self.favorites.iter().any(|s| s.story_id == story_id)
    }

    /// Whether this user submitted the story with this id.
    pub fn owns(&self, story_id: &str) -> bool {
        self.stories.iter().any(|s| s.story_id == story_id)
    }

    /// Ids of every favorited story.
    pub fn favorite_ids(&self) -> std::collections::HashSet<&str> {
        self.favorites.iter().map(|s| s.story_id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str) -> Story {
        Story {
            story_id: id.to_string(),
            title: format!("Story {id}"),
            url: "https://example.com".to_string(),
            author: "Ada".to_string(),
            username: "ada".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_story_deserialize_camel_case() {
        let json = r#"{
            "storyId": "5081e46e-3143-4c0c-bbf4-c22eb11eb3f5",
            "title": "The Best Story Ever",
            "author": "Matt Lane",
            "url": "http://google.com",
            "username": "hueter",
            "createdAt": "2017-11-09T18:38:39.409Z"
        }"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.story_id, "5081e46e-3143-4c0c-bbf4-c22eb11eb3f5");
        assert_eq!(story.username, "hueter");
        assert!(story.created_at.is_some());
    }

    #[test]
    fn test_user_deserialize_without_token() {
        let json = r#"{
            "username": "hueter",
            "name": "Michael",
            "favorites": [],
            "stories": []
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Michael");
        assert!(user.login_token.is_empty());
    }

    #[test]
    fn test_user_token_is_not_serialized() {
        let user = User {
            username: "ada".to_string(),
            name: "Ada".to_string(),
            login_token: "secret".to_string(),
            stories: vec![],
            favorites: vec![],
            created_at: None,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_favorite_lookup_uses_story_id() {
        let user = User {
            username: "ada".to_string(),
            name: "Ada".to_string(),
            login_token: String::new(),
            stories: vec![story("mine")],
            favorites: vec![story("a"), story("b")],
            created_at: None,
        };

        assert!(user.is_favorite("a"));
        assert!(!user.is_favorite("c"));
        assert!(user.owns("mine"));
        assert_eq!(user.favorite_ids().len(), 2);
    }
}
