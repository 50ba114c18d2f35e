use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode, Url};

use crate::error::{Error, Result};
use crate::github::source::ProfileSource;
use crate::models::{GitHubUser, Repository};

pub const REPOS_PER_PAGE: u32 = 100;

/// Anonymous GitHub REST client; no token is ever attached.
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("gitpunk/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| Error::Config(format!("invalid GitHub API URL {}: {}", base_url, e)))?;

        Ok(Self { client, base_url })
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment so a
    /// handle can never escape its path position.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn user_url(&self, username: &str) -> Result<Url> {
        self.endpoint(&["users", username])
    }

    pub fn repos_url(&self, username: &str) -> Result<Url> {
        let mut url = self.endpoint(&["users", username, "repos"])?;
        url.query_pairs_mut()
            .append_pair("per_page", &REPOS_PER_PAGE.to_string())
            .append_pair("sort", "updated");
        Ok(url)
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = self.user_url(username)?;
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        let response = ensure_success(response)?;
        Ok(response.json().await?)
    }

    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let url = self.repos_url(username)?;
        tracing::info!("Fetching repositories for: {}", username);

        let response = ensure_success(self.client.get(url).send().await?)?;
        let repos: Vec<Repository> = response.json().await?;
        tracing::debug!("Received {} repositories", repos.len());

        Ok(repos)
    }
}

fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    tracing::warn!("GitHub responded with {}", status);
    Err(Error::Upstream(status_text(status)))
}

/// Reason phrase for a status, falling back to the numeric code.
pub fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = GitHubClient::with_base_url("http://localhost:9000/").unwrap();
        assert_eq!(
            client.user_url("octocat").unwrap().as_str(),
            "http://localhost:9000/users/octocat"
        );
        assert_eq!(
            client.repos_url("octocat").unwrap().as_str(),
            "http://localhost:9000/users/octocat/repos?per_page=100&sort=updated"
        );
    }

    #[test]
    fn test_urls_keep_base_path() {
        let client = GitHubClient::with_base_url("http://ghe.local/api/v3").unwrap();
        assert_eq!(
            client.user_url("octocat").unwrap().as_str(),
            "http://ghe.local/api/v3/users/octocat"
        );
    }

    #[test]
    fn test_handle_cannot_escape_path_segment() {
        let client = GitHubClient::with_base_url("http://localhost:9000").unwrap();
        assert_eq!(
            client.user_url("a/repos").unwrap().as_str(),
            "http://localhost:9000/users/a%2Frepos"
        );
        let repos = client.repos_url("a?x").unwrap();
        assert_eq!(repos.path(), "/users/a%3Fx/repos");
        assert_eq!(repos.query(), Some("per_page=100&sort=updated"));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(
            GitHubClient::with_base_url("not a url"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(StatusCode::FORBIDDEN), "Forbidden");
        assert_eq!(status_text(StatusCode::from_u16(599).unwrap()), "599");
    }
}
