//! GitHub API client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use urlencoding::encode;

use crate::domain::entities::{Event, EventKind, LanguageBytes, Profile, Repository};
use crate::domain::ports::GitHubClient;
use crate::error::GitHubError;

const AGENT: &str = concat!("portfolio-api/", env!("CARGO_PKG_VERSION"));

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Implementation of the GitHub API client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClientImpl {
    /// `timeout` bounds each request from connect to the end of the body.
    pub fn new(
        base_url: String,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GitHubError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self
            .http
            .get(url)
            .header(USER_AGENT, AGENT)
            .header(ACCEPT, "application/vnd.github+json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn fetch<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, GitHubError> {
        let response = self.get(url).send().await?;
        self.handle_response(url, response).await
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, GitHubError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GitHubError::Deserialization(e.to_string()))
        } else if status.as_u16() == 404 {
            Err(GitHubError::NotFound(url.to_string()))
        } else if status.as_u16() == 429 || is_rate_limit_exhausted(&response) {
            Err(GitHubError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// GitHub signals an exhausted quota with 403 and `x-ratelimit-remaining: 0`.
fn is_rate_limit_exhausted(response: &reqwest::Response) -> bool {
    response.status().as_u16() == 403
        && response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            == Some("0")
}

/// Response types from the GitHub API
#[derive(Deserialize)]
struct UserResponse {
    #[serde(default)]
    public_repos: u64,
    #[serde(default)]
    followers: u64,
    #[serde(default)]
    following: u64,
}

impl From<UserResponse> for Profile {
    fn from(r: UserResponse) -> Self {
        Profile {
            public_repos: r.public_repos,
            followers: r.followers,
            following: r.following,
        }
    }
}

#[derive(Deserialize)]
struct EventResponse {
    #[serde(rename = "type")]
    event_type: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    repo: EventRepoResponse,
    created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    payload: EventPayloadResponse,
}

#[derive(Default, Deserialize)]
struct EventRepoResponse {
    #[serde(default)]
    name: String,
}

/// Only `commits` is read, and only when it is an array.
#[derive(Default, Deserialize)]
struct EventPayloadResponse {
    #[serde(default)]
    commits: Option<Value>,
}

impl EventPayloadResponse {
    fn commit_count(&self) -> Option<u32> {
        match &self.commits {
            Some(Value::Array(commits)) if !commits.is_empty() => {
                Some(u32::try_from(commits.len()).unwrap_or(u32::MAX))
            }
            _ => None,
        }
    }
}

impl From<EventResponse> for Event {
    fn from(r: EventResponse) -> Self {
        let kind = EventKind::from_type(&r.event_type);
        let commit_count = match kind {
            EventKind::Push => r.payload.commit_count(),
            _ => None,
        };
        Event {
            kind,
            raw_type: r.event_type,
            repository: r.repo.name,
            created_at: r.created_at,
            commit_count,
        }
    }
}

/// Decode one element of the events array. An element without a type or
/// timestamp cannot be placed and is skipped.
fn decode_event(value: Value) -> Option<Event> {
    match serde_json::from_value::<EventResponse>(value) {
        Ok(event) => Some(event.into()),
        Err(e) => {
            tracing::warn!(error = %e, "Skipping malformed event");
            None
        }
    }
}

#[derive(Deserialize)]
struct RepoResponse {
    name: String,
    languages_url: String,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    fork: bool,
}

impl From<RepoResponse> for Repository {
    fn from(r: RepoResponse) -> Self {
        Repository {
            name: r.name,
            languages_url: r.languages_url,
            stars: r.stargazers_count,
            fork: r.fork,
        }
    }
}

#[async_trait]
impl GitHubClient for GitHubClientImpl {
    async fn get_profile(&self, username: &str) -> Result<Profile, GitHubError> {
        let url = self.api_url(&format!("/users/{}", encode(username)));
        let user: UserResponse = self.fetch(&url).await?;
        Ok(user.into())
    }

    async fn list_public_events(&self, username: &str) -> Result<Vec<Event>, GitHubError> {
        let url = self.api_url(&format!("/users/{}/events/public", encode(username)));
        let events: Vec<Value> = self.fetch(&url).await?;
        Ok(events.into_iter().filter_map(decode_event).collect())
    }

    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>, GitHubError> {
        let url = self.api_url(&format!(
            "/users/{}/repos?per_page=100&sort=updated",
            encode(username)
        ));
        let repos: Vec<RepoResponse> = self.fetch(&url).await?;
        Ok(repos.into_iter().map(Into::into).collect())
    }

    async fn get_languages(&self, languages_url: &str) -> Result<LanguageBytes, GitHubError> {
        self.fetch(languages_url).await
    }
}
