mod config;
mod errors;
mod history;
mod llm_client;
mod profiles;
mod routes;
mod session;
mod state;
mod transform;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::history::file_store::JsonFileHistoryStore;
use crate::llm_client::{CompletionBackend, CompletionClient};
use crate::routes::build_router;
use crate::session::SuggestionSet;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Content Helper API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the completion client. A missing key is surfaced per call,
    // not at startup.
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set — transformation requests will fail until it is");
    }
    let llm: Arc<dyn CompletionBackend> =
        Arc::new(CompletionClient::new(config.openai_api_key.clone()));
    info!("Completion client initialized (model: {})", llm_client::MODEL);

    // Initialize the history store (JSON file backend)
    let history = Arc::new(JsonFileHistoryStore::open(&config.history_path).await);
    info!("History store at {}", config.history_path);

    // Build app state
    let state = AppState {
        llm,
        history,
        suggestions: Arc::new(Mutex::new(SuggestionSet::default())),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the UI is served from a different origin in dev

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
