use async_trait::async_trait;

use crate::error::Result;
use crate::models::{GitHubUser, Repository};

/// Read-only source of profile records and repository lists.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn get_user(&self, username: &str) -> Result<GitHubUser>;

    /// Returns at most one page of repositories, most recently updated first.
    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>>;
}
