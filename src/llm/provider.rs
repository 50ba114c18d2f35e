use async_trait::async_trait;
use crate::error::Result;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Sends one prompt and returns the generated text, or `None` when the
    /// model produced no text at all.
    async fn generate(&self, prompt: &str, credential: &str) -> Result<Option<String>>;
    fn model(&self) -> &str;
    fn name(&self) -> &str;
}
