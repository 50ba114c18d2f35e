pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod llm;
pub mod analysis;
pub mod dashboard;
pub mod render;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use github::{GitHubClient, ProfileSource};
pub use llm::{GeminiProvider, InsightGenerator, LLMProvider};
pub use analysis::ProfileScanner;
pub use dashboard::{Dashboard, DashboardView, Outcome};
pub use render::Format;
