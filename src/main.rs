use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use vocab_quiz::config::Config;

const DEFAULT_LOG_FILTER: &str = "vocab_quiz=info,word_deck=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Arc::new(Config::from_env());
    vocab_quiz::bootstrap(&config)
        .with_context(|| format!("Failed to prepare results directory {}", config.results_path))?;

    let app = vocab_quiz::app(config.clone());

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address))?;

    tracing::info!(
        words = %config.words_path,
        results = %config.results_path,
        "Server running on http://{}",
        config.bind_address
    );
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
