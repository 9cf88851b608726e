//! Verdict CLI - batch-converts Hebrew court verdict documents into
//! structured JSON records.

mod config;
mod fs;

use crate::config::CliConfig;
use crate::fs::{FsDocumentSource, FsRecordSink, PlainTextExtractor};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use verdict_llm::GeminiProvider;
use verdict_pipeline::{BatchPipeline, PipelineConfig};

#[derive(Parser)]
#[command(
    name = "verdict",
    about = "Batch-convert Hebrew court verdicts into structured JSON records"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "verdict.toml")]
    config: PathBuf,

    /// Gemini API key (overrides the configuration file)
    #[arg(long, env = "GEMINI_API_KEY")]
    api_key: Option<String>,

    /// Source directory override
    #[arg(long)]
    source_dir: Option<String>,

    /// Target directory override
    #[arg(long)]
    target_dir: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Log to stderr so stdout stays clean for shell pipelines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let mut config = CliConfig::load(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    if let Some(api_key) = cli.api_key {
        config.api_key = api_key;
    }
    if let Some(source_dir) = cli.source_dir {
        config.source_dir = source_dir;
    }
    if let Some(target_dir) = cli.target_dir {
        config.target_dir = target_dir;
    }
    config.validate().map_err(anyhow::Error::msg)?;

    let provider = GeminiProvider::new(&config.api_endpoint, &config.model, &config.api_key);
    let pipeline_config = PipelineConfig::new(&config.source_dir, &config.target_dir);

    let mut pipeline = BatchPipeline::new(
        FsDocumentSource,
        PlainTextExtractor,
        FsRecordSink,
        provider,
        pipeline_config,
    );

    let summary = pipeline.run().await?;

    println!("Run complete: {}", summary);
    Ok(())
}
