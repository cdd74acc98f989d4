//! `appsketchd`, the app extraction server binary.
//!
//! Usage:
//!   appsketchd [--listen <addr>]
//!
//! Requires `OPENAI_API_KEY` and `OPENAI_MODEL` in the environment;
//! `OPENAI_BASE_URL` and `PORT` are optional.

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use appsketch_provider::{Extractor, OpenAiBackend};
use appsketch_server::config::ServerConfig;
use appsketch_server::routes::build_router;

/// App extraction server.
#[derive(Parser, Debug)]
#[command(name = "appsketchd", about = "App description extraction server")]
struct Cli {
    /// Listen address (overrides the PORT environment variable).
    #[arg(long = "listen")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::from_env()?;
    let listen = cli
        .listen
        .unwrap_or_else(|| format!("0.0.0.0:{}", config.port));

    let backend = OpenAiBackend::new(
        config.base_url.clone(),
        config.api_key.clone(),
        config.model.clone(),
    );
    let extractor = Extractor::new(Box::new(backend))?;
    info!(model = %config.model, "extraction pipeline ready");

    let app = build_router(Arc::new(extractor));
    let listener = tokio::net::TcpListener::bind(&listen).await?;
    info!("listening on http://{listen}");
    axum::serve(listener, app).await?;

    Ok(())
}
