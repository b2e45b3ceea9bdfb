//! GitHub client port trait
//!
//! Defines the read-only interface the activity aggregator needs from a
//! GitHub-compatible REST API.

use async_trait::async_trait;

use crate::domain::entities::{Event, LanguageBytes, Profile, Repository};
use crate::error::GitHubError;

/// Port trait for GitHub API reads
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// `GET /users/{username}`
    async fn get_profile(&self, username: &str) -> Result<Profile, GitHubError>;

    /// `GET /users/{username}/events/public`, newest first
    async fn list_public_events(&self, username: &str) -> Result<Vec<Event>, GitHubError>;

    /// `GET /users/{username}/repos?per_page=100&sort=updated`, forks included
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>, GitHubError>;

    /// `GET {languages_url}` for one repository
    async fn get_languages(&self, languages_url: &str) -> Result<LanguageBytes, GitHubError>;
}
