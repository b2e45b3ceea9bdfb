//! GitHub profile entity

use serde::{Deserialize, Serialize};

/// The three profile counters the activity view needs.
///
/// Fetched once per view build. A failed fetch yields `Profile::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}
