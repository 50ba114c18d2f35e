use std::future::Future;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use gitpunk::render::{render, Format};
use gitpunk::{Config, Dashboard, GeminiProvider, GitHubClient, InsightGenerator, ProfileScanner};

#[derive(Parser, Debug)]
#[command(name = "gitpunk")]
#[command(version)]
#[command(about = "Scan a GitHub profile and generate a recruiter report")]
struct Args {
    /// GitHub username to scan
    username: Option<String>,

    /// Gemini API key (falls back to GEMINI_API_KEY)
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Generate the AI recruiter report after scanning
    #[arg(short, long)]
    report: bool,

    /// Output format (text, markdown, json)
    #[arg(short, long, default_value = "text")]
    format: Format,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Read commands from stdin instead of running once
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitpunk=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let scanner = ProfileScanner::new(GitHubClient::with_base_url(&config.github_api_url)?);
    let generator = InsightGenerator::new(GeminiProvider::with_base_url(
        &config.gemini_api_url,
        Some(config.model.clone()),
    )?);
    let dashboard = Dashboard::new(scanner, generator);

    if let Some(key) = args.api_key.clone().or(config.gemini_api_key.clone()) {
        dashboard.set_credential(&key).await;
    }

    if args.interactive {
        return run_interactive(&dashboard, &args).await;
    }

    let Some(ref username) = args.username else {
        anyhow::bail!("a username is required unless --interactive is given");
    };

    with_spinner(format!("Scanning {}...", username.trim()), dashboard.submit_scan(username)).await?;

    if args.report && dashboard.can_generate().await {
        with_spinner("ANALYZING_DATA_PATTERNS...".to_string(), dashboard.request_report()).await?;
    }

    let view = dashboard.view().await;
    write_output(&render(&view, args.format)?, args.output.as_deref()).await?;

    if let Some(error) = view.scan.error.or(view.analysis.error) {
        anyhow::bail!(error);
    }

    Ok(())
}

async fn with_spinner<F: Future>(message: String, fut: F) -> anyhow::Result<F::Output> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));

    let output = fut.await;
    pb.finish_and_clear();
    Ok(output)
}

async fn write_output(output: &str, path: Option<&str>) -> anyhow::Result<()> {
    if let Some(path) = path {
        tokio::fs::write(path, output).await?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }
    Ok(())
}

const HELP: &str = "commands:
  scan <username>   fetch and aggregate a profile
  key <api-key>     set the Gemini API key for this session
  report            generate the AI recruiter report for the current profile
  show              render the current state again
  help              show this message
  quit              exit";

async fn run_interactive(dashboard: &Dashboard, args: &Args) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    if let Some(ref username) = args.username {
        dashboard.submit_scan(username).await;
        write_output(&render(&dashboard.view().await, args.format)?, None).await?;
    }

    println!("{}", HELP);

    loop {
        stdout.write_all(b"gitpunk> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => continue,
            "scan" => {
                if rest.trim().is_empty() {
                    println!("usage: scan <username>");
                    continue;
                }
                with_spinner(format!("Scanning {}...", rest.trim()), dashboard.submit_scan(rest)).await?;
            }
            "key" => {
                dashboard.set_credential(rest.trim()).await;
                println!("API key {}.", if rest.trim().is_empty() { "cleared" } else { "set" });
                continue;
            }
            "report" => {
                if !dashboard.can_generate().await {
                    println!("Report unavailable: scan a profile first, or a report already exists.");
                    continue;
                }
                with_spinner("ANALYZING_DATA_PATTERNS...".to_string(), dashboard.request_report()).await?;
            }
            "show" => {}
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("unknown command '{}', try 'help'", other);
                continue;
            }
        }

        write_output(&render(&dashboard.view().await, args.format)?, None).await?;
    }

    Ok(())
}
