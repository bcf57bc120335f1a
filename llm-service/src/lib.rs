//! Text-completion capability for the assistant backend.
//!
//! - Construct an [`services::ollama_service::OllamaService`] once from an
//!   env-driven [`config::llm_model_config::LlmModelConfig`], wrap in `Arc`,
//!   and pass clones to dependents.
//! - Completion is non-streaming; sampling parameters and stop sequences
//!   come from the config.
//! - When no endpoint is configured the application falls back to the mock
//!   responder in `chat-core`; this crate only covers the live path.

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::{LlmServiceError, Result};
pub use services::ollama_service::OllamaService;
