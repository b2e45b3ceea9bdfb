//! Public activity event entity

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The API returns at most this many events; anything beyond is dropped.
pub const MAX_EVENTS: usize = 30;

/// Event category, used for feed icons and heatmap weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Push,
    PullRequest,
    Issues,
    Create,
    Watch,
    Fork,
    Other,
}

impl EventKind {
    /// Classify a raw API event type such as `"PushEvent"`.
    ///
    /// Matching is by substring in a fixed order, so `"PullRequestReviewEvent"`
    /// is a pull request and `"IssueCommentEvent"` is `Other`.
    pub fn from_type(raw: &str) -> Self {
        if raw.contains("Push") {
            EventKind::Push
        } else if raw.contains("PullRequest") {
            EventKind::PullRequest
        } else if raw.contains("Issues") {
            EventKind::Issues
        } else if raw.contains("Create") {
            EventKind::Create
        } else if raw.contains("Watch") {
            EventKind::Watch
        } else if raw.contains("Fork") {
            EventKind::Fork
        } else {
            EventKind::Other
        }
    }
}

/// A single public event, newest first in any list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    /// The type string as the API sent it, e.g. `"PushEvent"`
    pub raw_type: String,
    pub repository: String,
    pub created_at: DateTime<Utc>,
    /// Commits carried by a push; `None` for every other kind
    pub commit_count: Option<u32>,
}

impl Event {
    /// How much this event adds to its day on the heatmap.
    pub fn contribution_weight(&self) -> u32 {
        match self.kind {
            EventKind::Push => self.commit_count.filter(|c| *c > 0).unwrap_or(1),
            _ => 1,
        }
    }

    /// Human-readable action, `"PullRequestEvent"` becomes `"Pull Request Event"`.
    pub fn action_label(&self) -> String {
        static CAPITAL: OnceLock<Option<Regex>> = OnceLock::new();
        match CAPITAL.get_or_init(|| Regex::new(r"([A-Z])").ok()) {
            Some(re) => re.replace_all(&self.raw_type, " $1").trim().to_string(),
            None => self.raw_type.clone(),
        }
    }
}
