//! Model Catalog Binary
//!
//! Lists embedding-capable models from the Generative Language API.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use vexport::fetch_catalog;

/// VEXPORT Models - Embedding Model Listing
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// API key (falls back to the GEMINI_API_KEY environment variable)
    #[arg(short, long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vexport=info".parse()?))
        .init();

    let args = Args::parse();
    let api_key = args
        .api_key
        .or_else(|| std::env::var("GEMINI_API_KEY").ok())
        .unwrap_or_default();

    let client = reqwest::Client::new();

    // The listing is informational: a failed request is reported and the
    // process still exits cleanly.
    match fetch_catalog(&client, &api_key).await {
        Ok(catalog) => {
            println!("Available Embedding Models:");
            for name in catalog.embedding_models() {
                println!("- {}", name);
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}
