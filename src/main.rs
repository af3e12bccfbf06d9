use std::io::BufReader;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use orchat::{OpenRouterClient, RunChatUseCase};

#[derive(Parser)]
#[command(name = "orchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Model identifier, e.g. "openai/gpt-3.5-turbo" (overrides OPENROUTER_MODEL)
    #[arg(short, long)]
    model: Option<String>,

    /// API base URL (overrides OPENROUTER_BASE_URL)
    #[arg(short, long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Diagnostics go to stderr; stdout carries only the chat transcript.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let api_key = std::env::var("OPENROUTER_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        warn!("OPENROUTER_API_KEY is not set; requests will likely be rejected");
    }
    let model = cli
        .model
        .or_else(|| std::env::var("OPENROUTER_MODEL").ok())
        .unwrap_or_else(|| "openai/gpt-3.5-turbo".to_string());
    let base_url = cli
        .base_url
        .or_else(|| std::env::var("OPENROUTER_BASE_URL").ok())
        .unwrap_or_else(|| orchat::connector::DEFAULT_BASE_URL.to_string());

    let client = Arc::new(OpenRouterClient::new(api_key, model, base_url));

    let use_case = RunChatUseCase::new(client);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    use_case
        .execute(BufReader::new(stdin.lock()), stdout.lock())
        .await?;

    Ok(())
}
