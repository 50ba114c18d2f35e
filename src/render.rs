use serde::Serialize;

use crate::analysis::{hacker_score, language_color};
use crate::dashboard::DashboardView;
use crate::error::Result;
use crate::models::{InsightReport, LanguageStat, ProfileSnapshot};

const BAR_WIDTH: usize = 30;
const LOADING_SCAN: &str = "SCANNING_TARGET...";
const LOADING_REPORT: &str = "ANALYZING_DATA_PATTERNS...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Markdown,
    Json,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "markdown" | "md" => Ok(Format::Markdown),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format '{}' (expected text, markdown or json)", other)),
        }
    }
}

pub fn render(view: &DashboardView, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => render_text(view),
        Format::Markdown => render_markdown(view),
        Format::Json => render_json(view)?,
    })
}

/// Proportional bar, `max` mapping to the full width.
fn bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (value as f64 / max as f64 * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.min(BAR_WIDTH))
}

fn insight_placeholder(view: &DashboardView) -> &'static str {
    if view.credential_present {
        "Ready to analyze."
    } else {
        "Enter API Key to enable AI analysis."
    }
}

pub fn render_text(view: &DashboardView) -> String {
    let mut output = String::new();

    output.push_str("\n=== GitPunk Analyst ===\n");

    if view.scan.loading {
        output.push_str(&format!("\n{}\n", LOADING_SCAN));
    }
    if let Some(ref error) = view.scan.error {
        output.push_str(&format!("\n[!] {}\n", error));
    }

    let Some(ref profile) = view.scan.data else {
        return output;
    };

    output.push_str(&format!("\n{}\n", profile.user.display_name()));
    output.push_str(&format!("@{}  {}\n", profile.user.login, profile.user.html_url));
    if let Some(ref bio) = profile.user.bio {
        output.push_str(&format!("{}\n", bio));
    }
    output.push_str(&format!("Hacker Score: {}\n", hacker_score(profile)));

    output.push_str("\nStats:\n");
    for (label, value) in stat_rows(profile) {
        output.push_str(&format!("  {:<14}{}\n", label, value));
    }

    output.push_str("\nTech Stack Dist.:\n");
    if profile.languages.is_empty() {
        output.push_str("  (no languages detected)\n");
    }
    let max_lang = max_language_count(&profile.languages);
    for (i, lang) in profile.languages.iter().enumerate() {
        output.push_str(&format!(
            "  {:<16} {:>3} {} {}\n",
            lang.name,
            lang.value,
            language_color(i),
            bar(u64::from(lang.value), max_lang)
        ));
    }

    output.push_str("\nTop Repositories:\n");
    if profile.top_repos.is_empty() {
        output.push_str("  (no repositories)\n");
    }
    let max_stars = max_repo_stars(profile);
    for repo in &profile.top_repos {
        output.push_str(&format!(
            "  {:<24} {:>6} {}\n",
            repo.name,
            repo.stargazers_count,
            bar(u64::from(repo.stargazers_count), max_stars)
        ));
    }

    output.push_str("\n--- AI Recruiter Insight ---\n");
    if view.analysis.loading {
        output.push_str(&format!("{}\n", LOADING_REPORT));
    } else if let Some(ref report) = view.analysis.report {
        output.push_str(&report.text);
        output.push('\n');
    } else {
        output.push_str(&format!("{}\n", insight_placeholder(view)));
        output.push_str("Waiting for command...\n");
    }
    if let Some(ref error) = view.analysis.error {
        output.push_str(&format!("ERROR: {}\n", error));
    }

    output.push_str(&format!(
        "\nScanned on: {}\n",
        profile.scanned_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

pub fn render_markdown(view: &DashboardView) -> String {
    let mut output = String::new();

    output.push_str("# GitPunk Analyst\n\n");

    if view.scan.loading {
        output.push_str(&format!("_{}_\n\n", LOADING_SCAN));
    }
    if let Some(ref error) = view.scan.error {
        output.push_str(&format!("> **Error:** {}\n\n", error));
    }

    let Some(ref profile) = view.scan.data else {
        return output;
    };

    output.push_str(&format!("## {}\n\n", profile.user.display_name()));
    output.push_str(&format!("![{}]({})\n\n", profile.user.login, profile.user.avatar_url));
    output.push_str(&format!("[@{}]({})\n\n", profile.user.login, profile.user.html_url));
    if let Some(ref bio) = profile.user.bio {
        output.push_str(&format!("> {}\n\n", bio));
    }
    output.push_str(&format!("**Hacker Score:** {}\n\n", hacker_score(profile)));

    output.push_str("| Metric | Value |\n|--------|-------|\n");
    for (label, value) in stat_rows(profile) {
        output.push_str(&format!("| {} | {} |\n", label, value));
    }

    if !profile.languages.is_empty() {
        output.push_str("\n## Tech Stack Dist.\n\n");
        output.push_str("| Language | Repos | Color |\n|----------|-------|-------|\n");
        for (i, lang) in profile.languages.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | `{}` |\n",
                lang.name,
                lang.value,
                language_color(i)
            ));
        }
    }

    if !profile.top_repos.is_empty() {
        output.push_str("\n## Top Repositories\n\n");
        output.push_str("| Repository | Stars | Language |\n|------------|-------|----------|\n");
        for repo in &profile.top_repos {
            output.push_str(&format!(
                "| [{}]({}) | {} | {} |\n",
                repo.name,
                repo.html_url,
                repo.stargazers_count,
                repo.language.as_deref().unwrap_or("-")
            ));
        }
    }

    output.push_str("\n## AI Recruiter Insight\n\n");
    if view.analysis.loading {
        output.push_str(&format!("_{}_\n", LOADING_REPORT));
    } else if let Some(ref report) = view.analysis.report {
        output.push_str(&report.text);
        output.push('\n');
    } else {
        output.push_str(&format!("_{}_\n", insight_placeholder(view)));
    }
    if let Some(ref error) = view.analysis.error {
        output.push_str(&format!("\n> **ERROR:** {}\n", error));
    }

    output.push_str(&format!(
        "\n---\n*Scanned on {}*\n",
        profile.scanned_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

#[derive(Serialize)]
struct JsonView<'a> {
    loading: bool,
    error: Option<&'a str>,
    profile: Option<&'a ProfileSnapshot>,
    hacker_score: Option<u8>,
    language_colors: Vec<&'static str>,
    report: Option<&'a InsightReport>,
    report_error: Option<&'a str>,
}

pub fn render_json(view: &DashboardView) -> Result<String> {
    let profile = view.scan.data.as_ref();
    let json = JsonView {
        loading: view.scan.loading || view.analysis.loading,
        error: view.scan.error.as_deref(),
        profile,
        hacker_score: profile.map(hacker_score),
        language_colors: profile
            .map(|p| (0..p.languages.len()).map(language_color).collect())
            .unwrap_or_default(),
        report: view.analysis.report.as_ref(),
        report_error: view.analysis.error.as_deref(),
    };

    Ok(serde_json::to_string_pretty(&json)?)
}

fn stat_rows(profile: &ProfileSnapshot) -> Vec<(&'static str, String)> {
    vec![
        ("Total Stars", profile.total_stars.to_string()),
        ("Public Repos", profile.user.public_repos.to_string()),
        ("Followers", profile.user.followers.to_string()),
        ("Top Lang", profile.top_language().unwrap_or("N/A").to_string()),
        ("Total Forks", profile.total_forks.to_string()),
        ("Fork Ratio", profile.fork_ratio.clone()),
    ]
}

fn max_language_count(languages: &[LanguageStat]) -> u64 {
    languages.iter().map(|l| u64::from(l.value)).max().unwrap_or(0)
}

fn max_repo_stars(profile: &ProfileSnapshot) -> u64 {
    profile
        .top_repos
        .iter()
        .map(|r| u64::from(r.stargazers_count))
        .max()
        .unwrap_or(0)
}
