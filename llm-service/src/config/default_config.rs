//! Default completion config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (one of the two is mandatory)
//! - `OLLAMA_MODEL`                = completion model (mandatory)
//! - `LLM_MAX_TOKENS`              = optional max tokens (u32, default 512)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{ConfigError, LlmServiceError, env_opt_u32, must_env},
};

/// Resolves the Ollama endpoint strictly from environment.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if both are missing
/// - [`ConfigError::InvalidNumber`] if `OLLAMA_PORT` is invalid
fn ollama_endpoint() -> Result<String, LlmServiceError> {
    if let Ok(url) = std::env::var("OLLAMA_URL") {
        if !url.trim().is_empty() {
            return Ok(url);
        }
    }
    if let Ok(port) = std::env::var("OLLAMA_PORT") {
        if !port.trim().is_empty() {
            let _ = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "OLLAMA_PORT",
                    reason: "expected u16 (1..=65535)",
                })?;
            return Ok(format!("http://localhost:{port}"));
        }
    }
    Err(LlmServiceError::Config(ConfigError::MissingVar(
        "OLLAMA_URL or OLLAMA_PORT",
    )))
}

/// Constructs the completion config from environment.
///
/// Sampling defaults match the assistant's generation profile:
/// `max_tokens = 512`, `temperature = 0.7`, `top_p = 0.95`, and the prompt
/// stop sequences `"User:"` and a blank line.
///
/// # Env
/// - `OLLAMA_MODEL` (required)
/// - `LLM_MAX_TOKENS` (optional)
pub fn config_ollama_completion() -> Result<LlmModelConfig, LlmServiceError> {
    let endpoint = ollama_endpoint()?;
    let model = must_env("OLLAMA_MODEL")?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?.or(Some(512));

    Ok(LlmModelConfig {
        model,
        endpoint,
        max_tokens,
        temperature: Some(0.7),
        top_p: Some(0.95),
        stop: vec!["User:".to_string(), "\n\n".to_string()],
        timeout_secs: Some(60),
    })
}
