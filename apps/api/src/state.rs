use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::history::HistoryStore;
use crate::llm_client::CompletionBackend;
use crate::session::SuggestionSet;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Production: `CompletionClient`.
    pub llm: Arc<dyn CompletionBackend>,
    /// Pluggable history backend. Default: JSON file next to the binary.
    pub history: Arc<dyn HistoryStore>,
    /// Suggestion state for the single logical UI session.
    pub suggestions: Arc<Mutex<SuggestionSet>>,
    pub config: Config,
}
