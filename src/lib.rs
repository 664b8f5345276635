//! NelaX Lite backend: classifies study questions, forwards them to a
//! chat-completion API with a matching system prompt, and serves the
//! study materials, reels and CBT question bank.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod llm;
pub mod preprocessing;
pub mod prompts;
pub mod server;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::llm::OpenRouterClient;
use crate::prompts::PromptTemplates;
use crate::server::{AppState, PAGES};

const DEFAULT_LOG_FILTER: &str = "nelax=info,nelax_lib=info,tower_http=info";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub async fn run() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let prompts = PromptTemplates::load(config.prompts_file.as_deref())?;
    let client = OpenRouterClient::new(&config)?;
    info!(model = client.model(), api_url = %config.api_url, "Completion client ready");

    let state = AppState::new(Arc::new(client), prompts, config.public_dir.clone());
    let app = server::router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    let base = format!("http://localhost:{}", config.port);
    info!("🚀 NelaX Lite running at {base}");
    for (route, _) in PAGES.iter().skip(1) {
        info!("📄 Page: {base}{route}");
    }
    info!("🧠 Ask: POST {base}/execute");
    info!("📚 API: {base}/api/materials, {base}/api/reels, {base}/api/cbt, {base}/api/ai-teach");

    axum::serve(listener, app).await?;
    Ok(())
}
