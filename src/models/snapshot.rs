use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{GitHubUser, Repository};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageStat {
    pub name: String,
    /// Number of repositories with this as their primary language.
    pub value: u32,
}

/// One fully aggregated view of a profile, produced by a single scan.
///
/// A snapshot is never merged with another one: the next scan replaces it
/// wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSnapshot {
    pub user: GitHubUser,
    /// Repositories in upstream order (most recently updated first).
    pub repos: Vec<Repository>,
    pub total_stars: u64,
    pub total_forks: u64,
    /// At most six entries, most used first.
    pub languages: Vec<LanguageStat>,
    /// At most five entries, most starred first.
    pub top_repos: Vec<Repository>,
    /// Percentage of forked repositories, e.g. `"25.0%"`, or `"0%"` when empty.
    pub fork_ratio: String,
    pub scanned_at: DateTime<Utc>,
}

impl ProfileSnapshot {
    pub fn top_language(&self) -> Option<&str> {
        self.languages.first().map(|l| l.name.as_str())
    }
}
