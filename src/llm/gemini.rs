use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MODEL;
use crate::error::{Error, Result};
use crate::github::client::status_text;
use crate::llm::provider::LLMProvider;

pub struct GeminiProvider {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: GeminiError,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
}

impl GeminiProvider {
    pub fn with_base_url(base_url: &str, model: Option<String>) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn generate(&self, prompt: &str, credential: &str) -> Result<Option<String>> {
        tracing::debug!("Sending {} prompt chars to {}", prompt.len(), self.model);

        let request_body = GenerateRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", credential)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::GenerationFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::GenerationFailed(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!("Gemini responded with {}", status);
            return Err(Error::GenerationFailed(
                error_message(&body).unwrap_or_else(|| status_text(status)),
            ));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| Error::GenerationFailed(format!("Failed to parse Gemini response: {}", e)))?;

        Ok(extract_text(parsed))
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn name(&self) -> &str {
        "Gemini"
    }
}

/// Concatenated text parts of the first candidate.
fn extract_text(response: GenerateResponse) -> Option<String> {
    let text = response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
}
