use serde::Serialize;

use crate::error::Result;
use crate::models::{LanguageStat, ProfileSnapshot};

pub const VERDICTS: [&str; 3] = ["Hire", "No Hire", "Keep on Watchlist"];

/// Reduced view of a snapshot; the only profile data that leaves the process
/// towards the text-generation API.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PromptData {
    pub username: String,
    pub bio: Option<String>,
    pub stats: PromptStats,
    pub top_languages: Vec<LanguageStat>,
    pub top_repos: Vec<PromptRepo>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PromptStats {
    pub public_repos: u32,
    pub followers: u32,
    pub total_stars: u64,
    pub fork_ratio: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PromptRepo {
    pub name: String,
    pub desc: Option<String>,
    pub stars: u32,
    pub lang: Option<String>,
}

impl PromptData {
    pub fn from_snapshot(snapshot: &ProfileSnapshot) -> Self {
        Self {
            username: snapshot.user.login.clone(),
            bio: snapshot.user.bio.clone(),
            stats: PromptStats {
                public_repos: snapshot.user.public_repos,
                followers: snapshot.user.followers,
                total_stars: snapshot.total_stars,
                fork_ratio: snapshot.fork_ratio.clone(),
            },
            top_languages: snapshot.languages.clone(),
            top_repos: snapshot
                .top_repos
                .iter()
                .map(|r| PromptRepo {
                    name: r.name.clone(),
                    desc: r.description.clone(),
                    stars: r.stargazers_count,
                    lang: r.language.clone(),
                })
                .collect(),
        }
    }
}

pub fn build_prompt(data: &PromptData) -> Result<String> {
    let json = serde_json::to_string(data)?;

    Ok(format!(
        r#"You are a cynical, elite software recruiter looking for top 1% talent.
Analyze this GitHub profile JSON data: {json}.

Output a "Cyberpunk Recruiter Report" in Markdown format with these sections:

1. **Archetype**: Assign a cool hacker class (e.g., "Code Ninja", "Script Kiddie", "Open Source Warlord", "React Ronin").
2. **Tech Stack Arsenal**: Briefly comment on their language choices.
3. **Strengths**: 2-3 bullet points on what they are good at based on repo stats.
4. **Red Flags**: 2-3 bullet points on potential weaknesses (e.g., low completion, only forks, no docs).
5. **Hiring Verdict**: A final harsh but fair conclusion ({verdicts}).

Tone: Professional but edgy, concise, technical. Use bolding for emphasis.
"#,
        json = json,
        verdicts = VERDICTS.join(" / "),
    ))
}
