use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::Utc;

use crate::models::{GitHubUser, LanguageStat, ProfileSnapshot, Repository};

pub const MAX_LANGUAGES: usize = 6;
pub const MAX_TOP_REPOS: usize = 5;

/// Folds a user record and its repositories into a snapshot.
pub fn aggregate(user: GitHubUser, repos: Vec<Repository>) -> ProfileSnapshot {
    let total_stars = total_stars(&repos);
    let total_forks = total_forks(&repos);
    let languages = language_stats(&repos);
    let top_repos = top_repositories(&repos);
    let fork_ratio = fork_ratio(&repos);

    tracing::debug!(
        "Aggregated {} repos: {} stars, {} forks, {} languages, fork ratio {}",
        repos.len(),
        total_stars,
        total_forks,
        languages.len(),
        fork_ratio
    );

    ProfileSnapshot {
        user,
        repos,
        total_stars,
        total_forks,
        languages,
        top_repos,
        fork_ratio,
        scanned_at: Utc::now(),
    }
}

pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| u64::from(r.stargazers_count)).sum()
}

pub fn total_forks(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| u64::from(r.forks_count)).sum()
}

/// Counts primary languages, most used first. Ties keep first-seen order.
pub fn language_stats(repos: &[Repository]) -> Vec<LanguageStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<LanguageStat> = Vec::new();

    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        match index.get(language) {
            Some(&i) => stats[i].value += 1,
            None => {
                index.insert(language, stats.len());
                stats.push(LanguageStat {
                    name: language.to_string(),
                    value: 1,
                });
            }
        }
    }

    // sort_by_key is stable
    stats.sort_by_key(|s| Reverse(s.value));
    stats.truncate(MAX_LANGUAGES);
    stats
}

/// Most starred repositories, leaving `repos` untouched.
pub fn top_repositories(repos: &[Repository]) -> Vec<Repository> {
    let mut sorted = repos.to_vec();
    sorted.sort_by_key(|r| Reverse(r.stargazers_count));
    sorted.truncate(MAX_TOP_REPOS);
    sorted
}

pub fn fork_ratio(repos: &[Repository]) -> String {
    if repos.is_empty() {
        return "0%".to_string();
    }

    let forks = repos.iter().filter(|r| r.fork).count();
    let pct = forks as f64 / repos.len() as f64 * 100.0;
    // ties round up, so 6.25 reads as 6.3 rather than 6.2
    format!("{:.1}%", (pct * 10.0).round() / 10.0)
}
