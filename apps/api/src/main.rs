mod config;
mod errors;
mod letter;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_app;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Read configuration before logging so RUST_LOG from .env applies,
    // but only act on a failure once there is a subscriber to report it.
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.rust_log.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={log_level},tower_http={log_level}",
                env!("CARGO_PKG_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Fatal: {e:#}");
            return Err(e);
        }
    };

    info!("Starting Scholar API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the model gateway once; every request shares it.
    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_api_base.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm.model());

    let state = AppState { llm: Arc::new(llm) };

    let app = build_app(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
