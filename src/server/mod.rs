//! HTTP server for the campus chatbot.
//!
//! This module wires the chat services into an axum router and runs it
//! until Ctrl+C or SIGTERM.

pub mod handlers;

pub use handlers::{AppState, HealthResponse, ADMIN_TOKEN_HEADER};

use crate::config::Config;
use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(handlers::chat))
        .route("/api/calendar/chat", post(handlers::calendar_chat))
        .route("/chat", post(handlers::calendar_chat))
        .route("/api/admin/qa", post(handlers::add_qa))
        .route("/api/health", get(handlers::health))
        .route("/api/stats", get(handlers::stats))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the chatbot HTTP server.
///
/// Binds to the configured address and serves until a shutdown signal
/// arrives.
///
/// # Errors
/// Fails if the listener cannot bind or the server hits a fatal error.
pub async fn run_server(config: &Config, state: AppState) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);
    let app = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    tracing::info!("Chatbot server listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                tracing::info!("Received SIGTERM, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
