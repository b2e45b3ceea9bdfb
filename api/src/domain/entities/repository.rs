//! Repository entity

use serde::{Deserialize, Serialize};

/// Maximum repositories requested from the API (one page)
pub const MAX_REPOSITORIES: usize = 100;

/// Repositories sampled for language aggregation, most recently updated first
pub const LANGUAGE_SAMPLE_SIZE: usize = 20;

/// A repository owned by the tracked account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub languages_url: String,
    pub stars: u64,
    pub fork: bool,
}

/// Drop forks and cap the list, preserving the API's recency order.
pub fn non_fork(repos: Vec<Repository>) -> Vec<Repository> {
    repos
        .into_iter()
        .filter(|r| !r.fork)
        .take(MAX_REPOSITORIES)
        .collect()
}

/// Total stars across a repository list
pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| r.stars).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u64, fork: bool) -> Repository {
        Repository {
            name: name.to_string(),
            languages_url: format!("https://api.github.com/repos/me/{}/languages", name),
            stars,
            fork,
        }
    }

    #[test]
    fn forks_are_excluded_and_order_kept() {
        let repos = vec![
            repo("newest", 1, false),
            repo("forked", 50, true),
            repo("older", 2, false),
        ];

        let clean = non_fork(repos);

        let names: Vec<_> = clean.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["newest", "older"]);
        assert_eq!(total_stars(&clean), 3);
    }

    #[test]
    fn list_is_capped() {
        let repos = (0..150).map(|i| repo(&format!("r{}", i), 0, false)).collect();
        assert_eq!(non_fork(repos).len(), MAX_REPOSITORIES);
    }

    #[test]
    fn total_stars_of_empty_list_is_zero() {
        assert_eq!(total_stars(&[]), 0);
    }
}
