//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! Clones share state, so a test can keep a handle and inspect calls after
//! the service under test has taken its own copy.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Event, LanguageBytes, Profile, Repository};
use crate::domain::ports::{GitHubClient, Mailer, OutboundEmail, RandomSource};
use crate::error::{GitHubError, MailError};

use super::fixtures::languages_url;

// ============================================================================
// Mock GitHub Client
// ============================================================================

#[derive(Default)]
struct GitHubCalls {
    profile: AtomicUsize,
    events: AtomicUsize,
    repositories: AtomicUsize,
    languages: AtomicUsize,
}

/// Serves canned data; anything not configured is a 404.
#[derive(Clone, Default)]
pub struct MockGitHubClient {
    profile: Arc<RwLock<Option<Profile>>>,
    events: Arc<RwLock<Option<Vec<Event>>>>,
    repositories: Arc<RwLock<Option<Vec<Repository>>>>,
    languages: Arc<RwLock<HashMap<String, LanguageBytes>>>,
    should_fail: Arc<RwLock<bool>>,
    fail_languages: Arc<RwLock<bool>>,
    hang_events: Arc<RwLock<bool>>,
    hang_languages: Arc<RwLock<bool>>,
    calls: Arc<GitHubCalls>,
}

impl MockGitHubClient {
    /// Empty account: zeroed profile, no events, no repositories
    pub fn new() -> Self {
        Self::default()
            .with_profile(Profile::default())
            .with_events(Vec::new())
            .with_repositories(Vec::new())
    }

    /// Every request fails
    pub fn failing() -> Self {
        let mock = Self::default();
        *mock.should_fail.write().unwrap() = true;
        mock
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        *self.profile.write().unwrap() = Some(profile);
        self
    }

    pub fn with_events(self, events: Vec<Event>) -> Self {
        *self.events.write().unwrap() = Some(events);
        self
    }

    pub fn with_repositories(self, repos: Vec<Repository>) -> Self {
        *self.repositories.write().unwrap() = Some(repos);
        self
    }

    /// Language bytes for the fixture repository `repo`
    pub fn with_languages(self, repo: &str, langs: &[(&str, u64)]) -> Self {
        let bytes = LanguageBytes(langs.iter().map(|(n, b)| (n.to_string(), *b)).collect());
        self.languages
            .write()
            .unwrap()
            .insert(languages_url(repo), bytes);
        self
    }

    /// Language requests fail; the other three still succeed
    pub fn failing_languages(self) -> Self {
        *self.fail_languages.write().unwrap() = true;
        self
    }

    /// The events request never completes
    pub fn hanging_events(self) -> Self {
        *self.hang_events.write().unwrap() = true;
        self
    }

    /// Language requests never complete
    pub fn hanging_languages(self) -> Self {
        *self.hang_languages.write().unwrap() = true;
        self
    }

    pub fn profile_calls(&self) -> usize {
        self.calls.profile.load(Ordering::SeqCst)
    }

    pub fn event_calls(&self) -> usize {
        self.calls.events.load(Ordering::SeqCst)
    }

    pub fn repository_calls(&self) -> usize {
        self.calls.repositories.load(Ordering::SeqCst)
    }

    pub fn language_calls(&self) -> usize {
        self.calls.languages.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), GitHubError> {
        if *self.should_fail.read().unwrap() {
            return Err(GitHubError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }
        Ok(())
    }
}

fn configured<T: Clone>(slot: &RwLock<Option<T>>, what: &str) -> Result<T, GitHubError> {
    slot.read()
        .unwrap()
        .clone()
        .ok_or_else(|| GitHubError::NotFound(what.to_string()))
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn get_profile(&self, username: &str) -> Result<Profile, GitHubError> {
        self.calls.profile.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        configured(&self.profile, username)
    }

    async fn list_public_events(&self, username: &str) -> Result<Vec<Event>, GitHubError> {
        self.calls.events.fetch_add(1, Ordering::SeqCst);
        let hang = *self.hang_events.read().unwrap();
        if hang {
            std::future::pending::<()>().await;
        }
        self.check_failure()?;
        configured(&self.events, username)
    }

    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>, GitHubError> {
        self.calls.repositories.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        configured(&self.repositories, username)
    }

    async fn get_languages(&self, languages_url: &str) -> Result<LanguageBytes, GitHubError> {
        self.calls.languages.fetch_add(1, Ordering::SeqCst);
        let hang = *self.hang_languages.read().unwrap();
        if hang {
            std::future::pending::<()>().await;
        }
        self.check_failure()?;
        if *self.fail_languages.read().unwrap() {
            return Err(GitHubError::RateLimited);
        }
        self.languages
            .read()
            .unwrap()
            .get(languages_url)
            .cloned()
            .ok_or_else(|| GitHubError::NotFound(languages_url.to_string()))
    }
}

// ============================================================================
// Mock Mailer
// ============================================================================

#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<RwLock<Vec<OutboundEmail>>>,
    attempts: Arc<AtomicUsize>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let mock = Self::default();
        *mock.should_fail.write().unwrap() = true;
        mock
    }

    /// Emails accepted so far
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.read().unwrap().clone()
    }

    /// Send calls, successful or not
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().unwrap() {
            return Err(MailError::Transport(
                "535 5.7.8 Username and Password not accepted".to_string(),
            ));
        }
        self.sent.write().unwrap().push(email.clone());
        Ok(())
    }
}

// ============================================================================
// Deterministic Random Source
// ============================================================================

/// Cycles through a fixed list; each draw is reduced modulo the bound.
pub struct SequenceRandom {
    values: Vec<u32>,
    next: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            next: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn below(&self, upper: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let i = self.next.fetch_add(1, Ordering::SeqCst) % self.values.len();
        self.values[i] % upper.max(1)
    }
}
