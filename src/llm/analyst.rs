use std::sync::Arc;

use chrono::Utc;

use crate::error::{Error, Result};
use crate::llm::prompts::{build_prompt, PromptData};
use crate::llm::provider::LLMProvider;
use crate::models::{InsightReport, ProfileSnapshot, NO_ANALYSIS_FALLBACK};

/// Turns a snapshot into a recruiter report via a text-generation provider.
pub struct InsightGenerator {
    llm: Arc<dyn LLMProvider>,
}

impl InsightGenerator {
    pub fn new(llm: impl LLMProvider + 'static) -> Self {
        Self { llm: Arc::new(llm) }
    }

    /// Every call re-sends the full prompt; nothing is cached per snapshot.
    pub async fn analyze(&self, snapshot: &ProfileSnapshot, credential: &str) -> Result<InsightReport> {
        if credential.is_empty() {
            return Err(Error::MissingCredential);
        }

        let prompt = build_prompt(&PromptData::from_snapshot(snapshot))?;
        tracing::info!(
            "Requesting insight for {} from {} ({})",
            snapshot.user.login,
            self.llm.name(),
            self.llm.model()
        );

        let text = match self.llm.generate(&prompt, credential).await {
            Ok(text) => text,
            Err(Error::GenerationFailed(message)) => return Err(Error::GenerationFailed(message)),
            Err(e) => return Err(Error::GenerationFailed(e.to_string())),
        };

        Ok(InsightReport {
            login: snapshot.user.login.clone(),
            model: self.llm.model().to_string(),
            text: text.unwrap_or_else(|| NO_ANALYSIS_FALLBACK.to_string()),
            generated_at: Utc::now(),
        })
    }
}
