//! HTTP client for the story server.
//!
//! Provides `ApiClient`, the blocking `StoryApi` implementation that speaks
//! the Hack-or-Snooze v3 JSON API.

use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};

use super::{ApiError, StoryApi, DEFAULT_API_URL};
use crate::models::{NewStory, Story, User};

/// Story server client.
pub struct ApiClient {
    /// HTTP client instance.
    client: Client,
    /// Base URL of the story server.
    base_url: String,
}

impl ApiClient {
    /// Creates a new client with the default URL.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_API_URL)
    }

    /// Creates a new client with a custom URL.
    pub fn with_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    fn segment_url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let invalid = |reason: String| ApiError::InvalidUrl(format!("{}: {reason}", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn user_url(&self, username: &str) -> Result<Url, ApiError> {
        self.segment_url(&["users", username])
    }

    fn favorite_url(&self, username: &str, story_id: &str) -> Result<Url, ApiError> {
        self.segment_url(&["users", username, "favorites", story_id])
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryApi for ApiClient {
    fn create_user(&self, username: &str, password: &str, name: &str) -> Result<User, ApiError> {
        let payload = SignupRequest {
            user: SignupUser {
                username,
                password,
                name,
            },
        };

        tracing::debug!(username, "creating account");
        let response = self.client.post(self.url("/signup")).json(&payload).send()?;
        let body: AuthResponse = ensure_success(response)?.json()?;
        Ok(body.user.with_token(body.token))
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let payload = LoginRequest {
            user: LoginUser { username, password },
        };

        tracing::debug!(username, "logging in");
        let response = self.client.post(self.url("/login")).json(&payload).send()?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND
        ) {
            let message = error_message(response);
            return Err(ApiError::InvalidCredentials(message));
        }

        let body: AuthResponse = ensure_success(response)?.json()?;
        Ok(body.user.with_token(body.token))
    }

    fn current_user(&self, token: &str, username: &str) -> Result<Option<User>, ApiError> {
        let response = self
            .client
            .get(self.user_url(username)?)
            .query(&[("token", token)])
            .send()?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND
        ) {
            tracing::debug!(username, status = %response.status(), "stored session rejected");
            return Ok(None);
        }

        let body: UserResponse = ensure_success(response)?.json()?;
        Ok(Some(body.user.with_token(token)))
    }

    fn list_stories(&self) -> Result<Vec<Story>, ApiError> {
        let response = self.client.get(self.url("/stories")).send()?;
        let body: StoriesResponse = ensure_success(response)?.json()?;
        tracing::debug!(count = body.stories.len(), "fetched stories");
        Ok(body.stories)
    }

    fn create_story(&self, token: &str, story: &NewStory) -> Result<Story, ApiError> {
        let payload = CreateStoryRequest { token, story };

        let response = self
            .client
            .post(self.url("/stories"))
            .json(&payload)
            .send()?;
        let body: StoryResponse = ensure_success(response)?.json()?;
        Ok(body.story)
    }

    fn add_favorite(&self, token: &str, username: &str, story_id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.favorite_url(username, story_id)?)
            .json(&TokenRequest { token })
            .send()?;
        ensure_success(response)?;
        Ok(())
    }

    fn remove_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.favorite_url(username, story_id)?)
            .json(&TokenRequest { token })
            .send()?;
        ensure_success(response)?;
        Ok(())
    }
}

/// Turns a non-2xx response into `ApiError::ServerError`.
fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let message = error_message(response);
    Err(ApiError::ServerError { status, message })
}

/// Extracts the human-readable message from an error response body.
fn error_message(response: Response) -> String {
    let text = response
        .text()
        .unwrap_or_else(|_| "Unknown error".to_string());
    parse_error_message(&text)
}

fn parse_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

// ==================== API Types ====================

#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    user: SignupUser<'a>,
}

#[derive(Debug, Serialize)]
struct SignupUser<'a> {
    username: &'a str,
    password: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    user: LoginUser<'a>,
}

#[derive(Debug, Serialize)]
struct LoginUser<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateStoryRequest<'a> {
    token: &'a str,
    story: &'a NewStory,
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    token: &'a str,
}

/// Login and signup responses carry the token next to the user record.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    user: User,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    user: User,
}

#[derive(Debug, Deserialize)]
struct StoriesResponse {
    stories: Vec<Story>,
}

#[derive(Debug, Deserialize)]
struct StoryResponse {
    story: Story,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_api_client_with_url() {
        let client = ApiClient::with_url("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_favorite_url() {
        let client = ApiClient::with_url("http://localhost:5000");
        assert_eq!(
            client.favorite_url("ada", "abc-123").unwrap().as_str(),
            "http://localhost:5000/users/ada/favorites/abc-123"
        );
    }

    #[test]
    fn test_path_segments_are_percent_encoded() {
        let client = ApiClient::with_url("http://localhost:5000");
        assert_eq!(
            client.favorite_url("a/b?c", "x y#z").unwrap().as_str(),
            "http://localhost:5000/users/a%2Fb%3Fc/favorites/x%20y%23z"
        );
        assert_eq!(
            client.user_url("../admin").unwrap().as_str(),
            "http://localhost:5000/users/..%2Fadmin"
        );
    }

    #[test]
    fn test_segment_url_keeps_base_path() {
        let client = ApiClient::with_url("http://localhost:5000/api/");
        assert_eq!(
            client.user_url("ada").unwrap().as_str(),
            "http://localhost:5000/api/users/ada"
        );
    }

    #[test]
    fn test_unparseable_base_url_is_an_error() {
        let client = ApiClient::with_url("not a url");
        assert!(matches!(client.user_url("ada"), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_auth_response_deserialize() {
        let json = r#"{
            "token": "eyJhbGciOiJIUzI1NiJ9.abc",
            "user": {
                "createdAt": "2017-11-09T18:38:39.409Z",
                "favorites": [],
                "name": "Test User",
                "stories": [],
                "username": "test"
            }
        }"#;

        let body: AuthResponse = serde_json::from_str(json).unwrap();
        let user = body.user.with_token(body.token);
        assert_eq!(user.username, "test");
        assert_eq!(user.login_token, "eyJhbGciOiJIUzI1NiJ9.abc");
    }

    #[test]
    fn test_stories_response_deserialize() {
        let json = r#"{
            "stories": [
                {
                    "author": "Matt Lane",
                    "createdAt": "2017-11-09T18:38:39.409Z",
                    "storyId": "5081e46e-3143-4c0c-bbf4-c22eb11eb3f5",
                    "title": "The Best Story Ever",
                    "updatedAt": "2017-11-09T18:38:39.409Z",
                    "url": "https://www.rithmschool.com/blog/do-you-know-javascript",
                    "username": "hueter"
                }
            ]
        }"#;

        let body: StoriesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.stories.len(), 1);
        assert_eq!(body.stories[0].author, "Matt Lane");
    }

    #[test]
    fn test_create_story_request_serialize() {
        let story = NewStory {
            author: "Ada".to_string(),
            title: "Notes".to_string(),
            url: "https://example.com".to_string(),
        };
        let payload = CreateStoryRequest {
            token: "tok",
            story: &story,
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"token":"tok","story":{"author":"Ada","title":"Notes","url":"https://example.com"}}"#
        );
    }

    #[test]
    fn test_signup_request_nests_user() {
        let payload = SignupRequest {
            user: SignupUser {
                username: "ada",
                password: "pw",
                name: "Ada",
            },
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.starts_with(r#"{"user":{"#));
        assert!(json.contains(r#""name":"Ada""#));
    }

    #[test]
    fn test_parse_error_message_envelope() {
        let body = r#"{"error":{"status":409,"title":"Conflict","message":"There is already a user with username 'ada'."}}"#;
        assert_eq!(
            parse_error_message(body),
            "There is already a user with username 'ada'."
        );
    }

    #[test]
    fn test_parse_error_message_plain_text() {
        assert_eq!(parse_error_message("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(parse_error_message("  "), "Unknown error");
    }
}
