use std::sync::Arc;

use crate::analysis::aggregate::aggregate;
use crate::error::Result;
use crate::github::ProfileSource;
use crate::models::ProfileSnapshot;

/// Fetches a profile and its repositories, then aggregates them.
pub struct ProfileScanner {
    source: Arc<dyn ProfileSource>,
}

impl ProfileScanner {
    pub fn new(source: impl ProfileSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Returns `Ok(None)` without touching the network when the handle is blank.
    pub async fn scan(&self, username: &str) -> Result<Option<ProfileSnapshot>> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(None);
        }

        tracing::info!("Scanning GitHub profile: {}", username);
        let user = self.source.get_user(username).await?;
        let repos = self.source.get_user_repos(username).await?;

        Ok(Some(aggregate(user, repos)))
    }
}
