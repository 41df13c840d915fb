//! The in-memory story list.
//!
//! Holds the sequence last fetched from the server. A refresh replaces it
//! wholesale; a local submission is appended without a round trip.

use serde::Serialize;

use crate::api::{ApiError, StoryApi};
use crate::models::Story;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StoryCollection {
    stories: Vec<Story>,
}

impl StoryCollection {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    /// Fetches a fresh snapshot from the server.
    ///
    /// The current list is left untouched when the fetch fails.
    pub fn refresh(&mut self, api: &impl StoryApi) -> Result<(), ApiError> {
        self.stories = api.list_stories()?;
        Ok(())
    }

    /// Adds a story that was just created on the server.
    pub fn append(&mut self, story: Story) {
        self.stories.push(story);
    }

    pub fn get(&self, story_id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.story_id == story_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Story> {
        self.stories.iter()
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn as_slice(&self) -> &[Story] {
        &self.stories
    }
}

impl<'a> IntoIterator for &'a StoryCollection {
    type Item = &'a Story;
    type IntoIter = std::slice::Iter<'a, Story>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
