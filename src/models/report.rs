use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NO_ANALYSIS_FALLBACK: &str = "No analysis generated.";

/// Free-form recruiter report generated for exactly one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightReport {
    /// Login of the snapshot this report was generated from.
    pub login: String,
    pub model: String,
    pub text: String,
    pub generated_at: DateTime<Utc>,
}
