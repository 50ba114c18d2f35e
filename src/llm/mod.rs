pub mod provider;
pub mod gemini;
pub mod prompts;
pub mod analyst;

pub use provider::LLMProvider;
pub use gemini::GeminiProvider;
pub use prompts::{build_prompt, PromptData};
pub use analyst::InsightGenerator;
