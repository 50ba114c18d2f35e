use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_api_url: String,
    pub gemini_api_url: String,
    pub model: String,
    pub gemini_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            gemini_api_url: DEFAULT_GEMINI_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            gemini_api_key: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let github_api_url = get("GITHUB_API_URL")
            .map(|v| validate_url("GITHUB_API_URL", v))
            .transpose()?
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string());

        let gemini_api_url = get("GEMINI_API_URL")
            .map(|v| validate_url("GEMINI_API_URL", v))
            .transpose()?
            .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string());

        let model = get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            github_api_url,
            gemini_api_url,
            model,
            gemini_api_key: get("GEMINI_API_KEY"),
        })
    }
}

fn validate_url(key: &str, value: String) -> Result<String> {
    let parsed = reqwest::Url::parse(&value)
        .map_err(|e| Error::Config(format!("{} is not a valid URL: {}", key, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::Config(format!("{} must be an http(s) URL", key)));
    }

    Ok(value.trim_end_matches('/').to_string())
}
