#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use gitpunk::models::{GitHubUser, Repository};
use gitpunk::{Error, LLMProvider, ProfileSource, Result};

pub mod server;

pub fn user_json(login: &str, public_repos: u32, followers: u32) -> GitHubUser {
    serde_json::from_value(json!({
        "login": login,
        "id": 583231,
        "node_id": "MDQ6VXNlcjU4MzIzMQ==",
        "avatar_url": format!("https://avatars.githubusercontent.com/u/583231?v=4&u={}", login),
        "html_url": format!("https://github.com/{}", login),
        "type": "User",
        "name": null,
        "company": "@github",
        "blog": "https://github.blog",
        "location": "San Francisco",
        "email": null,
        "bio": "Mascot",
        "public_repos": public_repos,
        "public_gists": 8,
        "followers": followers,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z",
        "updated_at": "2024-06-22T11:25:33Z"
    }))
    .expect("user fixture")
}

pub fn repo_json(name: &str, stars: u32, language: Option<&str>, fork: bool) -> Repository {
    serde_json::from_value(json!({
        "id": 1296269,
        "name": name,
        "full_name": format!("octocat/{}", name),
        "private": false,
        "html_url": format!("https://github.com/octocat/{}", name),
        "description": format!("{} description", name),
        "fork": fork,
        "language": language,
        "stargazers_count": stars,
        "watchers_count": stars,
        "forks_count": 1,
        "open_issues_count": 0,
        "size": 108,
        "created_at": "2011-01-26T19:01:12Z",
        "updated_at": "2024-01-26T19:14:43Z",
        "pushed_at": "2024-01-26T19:06:43Z",
        "homepage": null,
        "topics": ["demo"]
    }))
    .expect("repo fixture")
}

#[derive(Clone)]
pub enum Canned {
    Found {
        user: GitHubUser,
        repos: Vec<Repository>,
        delay: Duration,
    },
    NotFound,
    ReposUnavailable(GitHubUser),
}

/// In-memory stand-in for the GitHub API.
#[derive(Clone, Default)]
pub struct FakeSource {
    profiles: Arc<Mutex<HashMap<String, Canned>>>,
    pub requests: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn with(self, login: &str, canned: Canned) -> Self {
        self.profiles.lock().unwrap().insert(login.to_string(), canned);
        self
    }

    pub fn set(&self, login: &str, canned: Canned) {
        self.profiles.lock().unwrap().insert(login.to_string(), canned);
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn lookup(&self, username: &str) -> Option<Canned> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.profiles.lock().unwrap().get(username).cloned()
    }
}

#[async_trait]
impl ProfileSource for FakeSource {
    async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        match self.lookup(username) {
            Some(Canned::Found { user, delay, .. }) => {
                tokio::time::sleep(delay).await;
                Ok(user)
            }
            Some(Canned::ReposUnavailable(user)) => Ok(user),
            Some(Canned::NotFound) | None => Err(Error::UserNotFound(username.to_string())),
        }
    }

    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        match self.lookup(username) {
            Some(Canned::Found { repos, .. }) => Ok(repos),
            _ => Err(Error::Upstream("Forbidden".to_string())),
        }
    }
}

#[derive(Clone)]
pub enum Reply {
    Text(String),
    Empty,
    Fail(String),
}

/// Records every prompt it receives and answers with a canned reply.
#[derive(Clone)]
pub struct FakeLLM {
    reply: Arc<Mutex<Reply>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub credentials: Arc<Mutex<Vec<String>>>,
    delay: Duration,
}

impl FakeLLM {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply: Arc::new(Mutex::new(reply)),
            prompts: Arc::new(Mutex::new(Vec::new())),
            credentials: Arc::new(Mutex::new(Vec::new())),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LLMProvider for FakeLLM {
    async fn generate(&self, prompt: &str, credential: &str) -> Result<Option<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.credentials.lock().unwrap().push(credential.to_string());
        tokio::time::sleep(self.delay).await;

        let reply = self.reply.lock().unwrap().clone();
        match reply {
            Reply::Text(text) => Ok(Some(text)),
            Reply::Empty => Ok(None),
            Reply::Fail(message) => Err(Error::GenerationFailed(message)),
        }
    }

    fn model(&self) -> &str {
        "fake-model"
    }

    fn name(&self) -> &str {
        "Fake"
    }
}

pub fn found(login: &str, repos: Vec<Repository>) -> Canned {
    Canned::Found {
        user: user_json(login, repos.len() as u32, 10),
        repos,
        delay: Duration::ZERO,
    }
}

pub fn found_after(login: &str, repos: Vec<Repository>, delay: Duration) -> Canned {
    Canned::Found {
        user: user_json(login, repos.len() as u32, 10),
        repos,
        delay,
    }
}
