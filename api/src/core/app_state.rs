use std::sync::Arc;

use chat_store::MemoryStore;
use llm_service::{OllamaService, config::default_config::config_ollama_completion};
use tracing::{info, warn};

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Profile and conversation storage.
    pub store: Arc<MemoryStore>,
    /// Completion backend; `None` means every chat answers from the mock
    /// responder.
    pub llm: Option<Arc<OllamaService>>,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// A missing or invalid Ollama configuration is not fatal: the service
    /// starts in mock mode and `/health` reports `model_loaded: false`.
    pub fn from_env() -> Self {
        let llm = match config_ollama_completion() {
            Ok(cfg) => match OllamaService::new(cfg) {
                Ok(svc) => {
                    info!("completion backend configured");
                    Some(Arc::new(svc))
                }
                Err(err) => {
                    warn!(error = %err, "completion backend rejected config; using mock responses");
                    None
                }
            },
            Err(err) => {
                info!(reason = %err, "no completion backend configured; using mock responses");
                None
            }
        };

        Self {
            store: Arc::new(MemoryStore::new()),
            llm,
        }
    }
}
