//! Activity service
//!
//! Builds the GitHub activity view model: summary counters, the contribution
//! heatmap, the language breakdown and a short recent-activity feed.
//!
//! Every upstream call is attempted once, under a deadline, and degrades to
//! an empty default on failure or timeout; building a view never fails.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use futures::future::join_all;
use serde::Serialize;

use super::heatmap::build_heatmap;
use super::languages::language_shares;
use crate::domain::entities::{
    non_fork, total_stars, ContributionDay, Event, EventKind, HeatmapSource, LanguageBytes,
    LanguageShare, LanguageTotals, Profile, Repository, LANGUAGE_SAMPLE_SIZE, MAX_EVENTS,
};
use crate::domain::ports::{GitHubClient, RandomSource};
use crate::error::GitHubError;

/// Events shown in the recent-activity feed
pub const RECENT_ACTIVITY_LIMIT: usize = 8;

/// Fixed display values that replace fetched follower/following counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOverrides {
    pub followers: Option<u64>,
    pub following: Option<u64>,
}

/// Which account to aggregate and how to present it
#[derive(Debug, Clone)]
pub struct ActivitySettings {
    pub username: String,
    pub designated_language: String,
    pub overrides: DisplayOverrides,
    /// Deadline for each upstream call; a call still pending after it
    /// degrades like a failed one
    pub fetch_timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryCounters {
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub total_stars: u64,
}

/// One row of the recent-activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub kind: EventKind,
    /// e.g. "Push Event"
    pub action: String,
    pub repository: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Event> for ActivityItem {
    fn from(event: &Event) -> Self {
        ActivityItem {
            kind: event.kind,
            action: event.action_label(),
            repository: event.repository.clone(),
            created_at: event.created_at,
        }
    }
}

/// The combined view model rendered by the GitHub section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityView {
    pub summary: SummaryCounters,
    pub heatmap: Vec<ContributionDay>,
    pub heatmap_source: HeatmapSource,
    /// Empty when the account has no non-fork repositories
    pub languages: Vec<LanguageShare>,
    pub recent_activity: Vec<ActivityItem>,
}

/// Service that aggregates one account's public GitHub activity
pub struct ActivityService<GC, RS>
where
    GC: GitHubClient + ?Sized,
    RS: RandomSource + ?Sized,
{
    github: Arc<GC>,
    random: Arc<RS>,
    settings: ActivitySettings,
}

impl<GC, RS> ActivityService<GC, RS>
where
    GC: GitHubClient + ?Sized,
    RS: RandomSource + ?Sized,
{
    pub fn new(github: Arc<GC>, random: Arc<RS>, settings: ActivitySettings) -> Self {
        Self {
            github,
            random,
            settings,
        }
    }

    pub fn username(&self) -> &str {
        &self.settings.username
    }

    /// Build the view model with the heatmap ending on the current UTC day.
    pub async fn build_view(&self) -> ActivityView {
        self.build_view_on(Utc::now().date_naive()).await
    }

    /// Build the view model with the heatmap ending on `today`.
    pub async fn build_view_on(&self, today: NaiveDate) -> ActivityView {
        let (profile, events, repos) = tokio::join!(
            self.fetch_profile(),
            self.fetch_events(),
            self.fetch_repositories()
        );

        let languages = self.aggregate_languages(&repos).await;
        let (heatmap, heatmap_source) = build_heatmap(&events, today, self.random.as_ref());

        let overrides = self.settings.overrides;
        let summary = SummaryCounters {
            public_repos: profile.public_repos,
            followers: overrides.followers.unwrap_or(profile.followers),
            following: overrides.following.unwrap_or(profile.following),
            total_stars: total_stars(&repos),
        };

        tracing::debug!(
            username = %self.settings.username,
            events = events.len(),
            repos = repos.len(),
            languages = languages.len(),
            heatmap_source = ?heatmap_source,
            "Built activity view"
        );

        ActivityView {
            summary,
            heatmap,
            heatmap_source,
            languages,
            recent_activity: events
                .iter()
                .take(RECENT_ACTIVITY_LIMIT)
                .map(ActivityItem::from)
                .collect(),
        }
    }

    async fn within_deadline<T>(
        &self,
        call: impl Future<Output = Result<T, GitHubError>>,
    ) -> Result<T, GitHubError> {
        let deadline = self.settings.fetch_timeout;
        tokio::time::timeout(deadline, call)
            .await
            .unwrap_or(Err(GitHubError::Timeout(deadline)))
    }

    async fn fetch_profile(&self) -> Profile {
        let username = &self.settings.username;
        match self.within_deadline(self.github.get_profile(username)).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(error = %e, "Profile unavailable, using zeroed counters");
                Profile::default()
            }
        }
    }

    async fn fetch_events(&self) -> Vec<Event> {
        let username = &self.settings.username;
        match self
            .within_deadline(self.github.list_public_events(username))
            .await
        {
            Ok(mut events) => {
                events.truncate(MAX_EVENTS);
                events
            }
            Err(e) => {
                tracing::warn!(error = %e, "Events unavailable, heatmap will be synthetic");
                Vec::new()
            }
        }
    }

    /// Non-fork repositories, most recently updated first
    async fn fetch_repositories(&self) -> Vec<Repository> {
        let username = &self.settings.username;
        match self
            .within_deadline(self.github.list_repositories(username))
            .await
        {
            Ok(repos) => non_fork(repos),
            Err(e) => {
                tracing::warn!(error = %e, "Repositories unavailable");
                Vec::new()
            }
        }
    }

    /// Sum language bytes over the most recent repositories. The per-repo
    /// fetches run concurrently and a failed one counts as no languages.
    async fn aggregate_languages(&self, repos: &[Repository]) -> Vec<LanguageShare> {
        if repos.is_empty() {
            return Vec::new();
        }

        let fetches = repos.iter().take(LANGUAGE_SAMPLE_SIZE).map(|repo| async move {
            match self
                .within_deadline(self.github.get_languages(&repo.languages_url))
                .await
            {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(repo = %repo.name, error = %e, "Languages unavailable");
                    LanguageBytes::default()
                }
            }
        });
        let per_repo = join_all(fetches).await;

        let totals: LanguageTotals = per_repo.iter().collect();
        language_shares(totals, &self.settings.designated_language)
    }
}
