mod config;
mod errors;
mod interview;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::interview::backend::GenerativeBackend;
use crate::interview::generator::QuestionGenerator;
use crate::interview::session::SessionStore;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize question generation (LLM-backed when an API key is configured)
    let generator = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.llm_timeout)?;
            info!(
                "LLM client initialized (model: {}, timeout: {:?})",
                llm_client::MODEL,
                config.llm_timeout
            );
            info!("Question sampling config: {:?}", config.sampling);
            QuestionGenerator::new(
                Some(Arc::new(llm) as Arc<dyn GenerativeBackend>),
                config.sampling,
            )
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set — questions will come from the question bank only");
            QuestionGenerator::fallback_only()
        }
    };

    // Build app state
    let sessions = SessionStore::new();
    sessions.spawn_eviction(config.session_idle_timeout, config.session_sweep_interval);
    info!(
        "Idle conversations expire after {:?}",
        config.session_idle_timeout
    );

    let state = AppState {
        sessions,
        generator: Arc::new(generator),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the shell's origin once it is deployed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
