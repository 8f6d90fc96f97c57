// src/score_cli.rs
//! Offline scoring CLI: run the keyword heuristic against local files.

use anyhow::{Context, Result};
use clap::Parser;
use resume_analyzer::ai::Analyzer;
use resume_analyzer::config::ServiceConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "score-cli")]
#[command(about = "Score a resume JSON file against a job description")]
struct Cli {
    /// Path to the resume document (JSON)
    resume: PathBuf,

    /// Path to the job description (plain text)
    job_description: PathBuf,

    /// Base URL of an AI analysis service; omit for the offline heuristic
    #[arg(long)]
    ai_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let resume_raw = std::fs::read_to_string(&cli.resume)
        .with_context(|| format!("Failed to read resume file: {}", cli.resume.display()))?;
    let resume: serde_json::Value = serde_json::from_str(&resume_raw)
        .with_context(|| format!("Resume file is not valid JSON: {}", cli.resume.display()))?;

    let job_description = std::fs::read_to_string(&cli.job_description).with_context(|| {
        format!(
            "Failed to read job description file: {}",
            cli.job_description.display()
        )
    })?;

    let config = match cli.ai_url {
        Some(url) => ServiceConfig {
            ai_service_url: Some(url),
            ..ServiceConfig::offline()
        },
        None => ServiceConfig::offline(),
    };

    let analyzer = Analyzer::new(&config)?;
    let report = analyzer.analyze(&resume, &job_description).await;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
