//! Campus Chatbot - Main entry point
//!
//! Serves the college chatbot and the academic calendar bot over HTTP.

use anyhow::Result;
use campus_chatbot::repositories::{JsonQaRepository, QaRepository};
use campus_chatbot::services::{ChatService, ChatServiceImpl};
use campus_chatbot::{AppState, Config, MetricsTracker};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can apply
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Using Q&A store {} (threshold {}, cache TTL {}s)",
        config.qa_data_path.display(),
        config.similarity_threshold,
        config.reply_cache_ttl_secs
    );
    if config.admin_token.is_none() {
        info!("No ADMIN_TOKEN set, admin endpoint is open");
    }

    let repository =
        Arc::new(JsonQaRepository::new(config.qa_data_path.clone())) as Arc<dyn QaRepository>;
    let metrics = MetricsTracker::new();
    let chat = Arc::new(ChatServiceImpl::new(repository, &config, metrics.clone()).await?)
        as Arc<dyn ChatService>;

    let state = AppState::new(chat, metrics.clone(), config.admin_token.clone());
    campus_chatbot::server::run_server(&config, state).await?;

    info!("{}", metrics.summary());
    Ok(())
}
