//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{DateTime, Utc};

use crate::domain::entities::{ContactSubmission, Event, EventKind, Profile, Repository};

/// Languages URL used for fixture repository `repo`
pub fn languages_url(repo: &str) -> String {
    format!("https://api.github.com/repos/octo/{}/languages", repo)
}

pub fn test_profile() -> Profile {
    Profile {
        public_repos: 42,
        followers: 128,
        following: 9,
    }
}

/// A non-fork repository
pub fn test_repo(name: &str, stars: u64) -> Repository {
    Repository {
        name: name.to_string(),
        languages_url: languages_url(name),
        stars,
        fork: false,
    }
}

/// A push to `octo/site` carrying `commits` commits
pub fn push_event_at(at: DateTime<Utc>, commits: u32) -> Event {
    Event {
        kind: EventKind::Push,
        raw_type: "PushEvent".to_string(),
        repository: "octo/site".to_string(),
        created_at: at,
        commit_count: Some(commits),
    }
}

/// Any non-push event, by raw API type
pub fn event_at(raw_type: &str, at: DateTime<Utc>) -> Event {
    Event {
        kind: EventKind::from_type(raw_type),
        raw_type: raw_type.to_string(),
        repository: "octo/notes".to_string(),
        created_at: at,
        commit_count: None,
    }
}

pub fn test_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Collaboration".to_string(),
        message: "Loved the heatmap.".to_string(),
    }
}
