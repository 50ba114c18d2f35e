use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public profile record as returned by `GET /users/{handle}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub public_repos: u32,
    #[serde(default)]
    pub public_gists: u32,
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

impl GitHubUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.login)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub topics: Vec<String>,
}
