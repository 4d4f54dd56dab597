//! Command-line front end for link-lens.
//!
//! Runs the extraction and enrichment pipeline locally, without the HTTP
//! server.
//!
//! # Usage
//!
//! ```bash
//! # List the GitHub links in a PDF
//! cargo run --bin lens -- extract resume.pdf
//!
//! # Enrich links directly
//! cargo run --bin lens -- enrich https://github.com/rust-lang/rust https://github.com/alice
//!
//! # Both steps, raw JSON output
//! cargo run --bin lens -- --json scan resume.pdf
//! ```
//!
//! # Environment Variables
//!
//! - `GITHUB_TOKEN` (required for `enrich` and `scan`)
//! - `TARGET_DOMAIN`, `GITHUB_API_URL`, `ENRICH_CONCURRENCY`, `GITHUB_TIMEOUT_SECONDS`
//!   as for the server

use link_lens::application::services::{Extraction, ExtractionService};
use link_lens::config::{self, Config};
use link_lens::domain::entities::{EnrichedRecord, ProfileRecord, RepositoryRecord};
use link_lens::infrastructure::pdf::LopdfLinkReader;
use link_lens::server::build_state;
use link_lens::utils::link_classifier::LinkClassifier;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Extract and enrich GitHub links from PDF documents.
#[derive(Parser)]
#[command(name = "lens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print raw JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the platform links found in a PDF
    Extract {
        /// Path to the PDF file
        pdf: PathBuf,
    },

    /// Fetch profile and repository data for links
    Enrich {
        /// Profile or repository URLs
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Extract links from a PDF, then enrich them
    Scan {
        /// Path to the PDF file
        pdf: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { pdf } => {
            let extraction = extract(&pdf).await?;
            print_extraction(&extraction, cli.json)?;
        }
        Commands::Enrich { urls } => {
            let records = enrich(&urls).await?;
            print_records(&records, cli.json)?;
        }
        Commands::Scan { pdf } => {
            let extraction = extract(&pdf).await?;
            if !cli.json {
                print_extraction(&extraction, false)?;
            }
            if extraction.urls.is_empty() {
                println!("{}", "No GitHub links to enrich".yellow());
                return Ok(());
            }
            let records = enrich(&extraction.urls).await?;
            print_records(&records, cli.json)?;
        }
    }

    Ok(())
}

/// Runs extraction only; no token is needed.
async fn extract(path: &Path) -> Result<Extraction> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let domain = std::env::var("TARGET_DOMAIN").unwrap_or_else(|_| "github.com".to_string());
    let classifier = Arc::new(
        LinkClassifier::new(&domain).context("Failed to build link pattern from TARGET_DOMAIN")?,
    );
    let service = ExtractionService::new(Arc::new(LopdfLinkReader::new()), classifier);

    service
        .extract(bytes)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
}

async fn enrich(urls: &[String]) -> Result<Vec<EnrichedRecord>> {
    let config: Config = config::load_from_env()?;
    let state = build_state(&config)?;

    state
        .enrichment_service
        .enrich(urls)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))
}

fn print_extraction(extraction: &Extraction, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "pages": extraction.page_count,
            "urls": extraction.urls,
            "textSnippet": extraction.text_snippet,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "📄 Pages:".bright_blue().bold(),
        extraction.page_count.to_string().bright_white()
    );
    println!();

    if extraction.urls.is_empty() {
        println!("{}", "  No GitHub links found".yellow());
    } else {
        println!("{}", "🔗 Links".bright_blue().bold());
        for url in &extraction.urls {
            println!("  {}", url.cyan());
        }
    }
    println!();

    Ok(())
}

fn print_records(records: &[EnrichedRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    for record in records {
        match record {
            EnrichedRecord::Profile(profile) => print_profile(profile),
            EnrichedRecord::Repository(repository) => print_repository(repository),
        }
        println!();
    }

    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

fn print_profile(profile: &ProfileRecord) {
    println!(
        "{} {} ({})",
        "👤".bright_blue(),
        profile.name.bright_white().bold(),
        profile.url.bright_black()
    );
    if let Some(bio) = &profile.bio {
        println!("  {}", bio);
    }
    println!(
        "  Followers: {}  Following: {}  Public repos: {}  Joined: {}",
        profile.followers.to_string().cyan(),
        profile.following.to_string().cyan(),
        profile.public_repos.to_string().cyan(),
        profile.created_at.bright_black()
    );

    if !profile.repos.is_empty() {
        println!(
            "  {:<30} {:>8} {:>7} {:>8}",
            "Repository".bright_white().bold(),
            "Commits".bright_white().bold(),
            "Stars".bright_white().bold(),
            "Forks".bright_white().bold()
        );
        println!("  {}", "─".repeat(56).bright_black());
        for repo in &profile.repos {
            println!(
                "  {:<30} {:>8} {:>7} {:>8}",
                repo.name.cyan(),
                repo.commits,
                repo.stars,
                repo.forks
            );
        }
    }
}

fn print_repository(repository: &RepositoryRecord) {
    println!(
        "{} {} ({})",
        "📦".bright_blue(),
        repository.full_name.bright_white().bold(),
        repository.url.bright_black()
    );
    println!("  {}", repository.description);
    println!(
        "  Stars: {}  Forks: {}  License: {}  Created: {}",
        repository.stars.to_string().cyan(),
        repository.forks.to_string().cyan(),
        repository.license,
        repository.created_at.bright_black()
    );
    if let Some(language) = &repository.language {
        println!("  Language: {}", language.green());
    }

    if !repository.top_contributors.is_empty() {
        let contributors: Vec<String> = repository
            .top_contributors
            .iter()
            .map(|c| format!("{} ({})", c.login, c.commits))
            .collect();
        println!("  Top contributors: {}", contributors.join(", "));
    }
}
