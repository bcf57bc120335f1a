//! Lightweight Ollama client for non-streaming text completion.
//!
//! This module implements a thin client for the local Ollama API:
//! - `POST {endpoint}/api/generate` — synchronous text generation
//!   (`stream=false`) with sampling parameters and stop sequences.
//!
//! # Examples
//!
//! ```no_run
//! use llm_service::LlmModelConfig;
//! use llm_service::OllamaService;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = LlmModelConfig {
//!     model: "phi3:mini".into(),
//!     endpoint: "http://localhost:11434".into(),
//!     max_tokens: Some(512),
//!     temperature: Some(0.7),
//!     top_p: Some(0.95),
//!     stop: vec!["User:".into()],
//!     timeout_secs: Some(60),
//! };
//!
//! let svc = OllamaService::new(cfg)?;
//! let text = svc.generate("Write a haiku about Rust.").await?;
//! println!("{text}");
//! # Ok(()) }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::llm_model_config::LlmModelConfig;
use crate::error_handler::{
    ConfigError, LlmServiceError, Result, validate_http_endpoint, validate_range_f32,
    validate_stop_sequences,
};

/// Thin client for Ollama.
///
/// Initialized with a full [`LlmModelConfig`]. Reuses one HTTP client with a
/// configurable timeout.
pub struct OllamaService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_generate: String,
}

impl OllamaService {
    /// Creates a new [`OllamaService`] from the given config.
    ///
    /// # Errors
    /// - [`ConfigError::EmptyModel`] if the model name is blank
    /// - [`ConfigError::InvalidFormat`] if the endpoint is invalid
    /// - [`ConfigError::OutOfRange`] for out-of-range sampling parameters
    /// - [`LlmServiceError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self> {
        if cfg.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel.into());
        }
        validate_http_endpoint("OLLAMA_URL", cfg.endpoint.trim())?;
        if let Some(t) = cfg.temperature {
            validate_range_f32("temperature", t, 0.0, 2.0)?;
        }
        if let Some(p) = cfg.top_p {
            validate_range_f32("top_p", p, 0.0, 1.0)?;
        }
        validate_stop_sequences(&cfg.stop)?;

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .brotli(true)
            .build()?;

        let base = cfg.endpoint.trim().trim_end_matches('/').to_string();
        let url_generate = format!("{}/api/generate", base);

        Ok(Self {
            client,
            cfg,
            url_generate,
        })
    }

    /// Performs a **non-streaming** generation request via `/api/generate`.
    ///
    /// Mapped options:
    /// - `model`        ← `self.cfg.model`
    /// - `prompt`       ← argument
    /// - `num_predict`  ← `self.cfg.max_tokens`
    /// - `temperature`  ← `self.cfg.temperature`
    /// - `top_p`        ← `self.cfg.top_p`
    /// - `stop`         ← `self.cfg.stop`
    ///
    /// # Errors
    /// - [`LlmServiceError::HttpStatus`] for non-2xx responses
    /// - [`LlmServiceError::Transport`] for client errors
    /// - [`LlmServiceError::Decode`] if the response cannot be parsed
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest::from_cfg(&self.cfg, prompt);

        debug!("POST {}", self.url_generate);
        let resp = self
            .client
            .post(&self.url_generate)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_generate.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = text.chars().take(240).collect::<String>();
            return Err(LlmServiceError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        let out: GenerateResponse = resp.json().await.map_err(|e| {
            LlmServiceError::Decode(format!("serde error: {e}; ensure `stream=false` is used"))
        })?;

        Ok(out.response.trim().to_string())
    }
}

/* ==========================
HTTP payloads & options
========================== */

/// Request body for `/api/generate` (non-streaming).
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(default)]
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerateOptions<'a>>,
}

impl<'a> GenerateRequest<'a> {
    /// Builds a request from config and prompt.
    fn from_cfg(cfg: &'a LlmModelConfig, prompt: &'a str) -> Self {
        let options = GenerateOptions {
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            num_predict: cfg.max_tokens,
            stop: &cfg.stop,
        };

        Self {
            model: &cfg.model,
            prompt,
            stream: false,
            options: Some(options),
        }
    }
}

/// Subset of Ollama `options`.
#[derive(Debug, Serialize)]
struct GenerateOptions<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    stop: &'a [String],
}

/// Response body for `/api/generate`.
///
/// Minimal shape: the generated text is in `response`.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> LlmModelConfig {
        LlmModelConfig {
            model: "phi3:mini".into(),
            endpoint: "http://localhost:11434".into(),
            max_tokens: Some(512),
            temperature: Some(0.7),
            top_p: Some(0.95),
            stop: vec!["User:".into(), "\n\n".into()],
            timeout_secs: Some(30),
        }
    }

    #[test]
    fn constructor_validates_config() {
        assert!(OllamaService::new(cfg()).is_ok());

        let mut bad = cfg();
        bad.model = "  ".into();
        assert!(OllamaService::new(bad).is_err());

        let mut bad = cfg();
        bad.endpoint = "localhost:11434".into();
        assert!(OllamaService::new(bad).is_err());

        let mut bad = cfg();
        bad.top_p = Some(1.5);
        assert!(OllamaService::new(bad).is_err());
    }

    #[test]
    fn request_body_carries_stop_sequences() {
        let config = cfg();
        let body = GenerateRequest::from_cfg(&config, "hello");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["options"]["stop"][0], "User:");
        assert_eq!(json["options"]["num_predict"], 512);
        assert_eq!(json["stream"], false);
    }
}
