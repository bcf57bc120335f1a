//! Unified error handling for `llm-service`.
//!
//! One top-level [`LlmServiceError`] for the whole crate, with config errors
//! grouped in [`ConfigError`]. Small env helpers return the unified
//! [`Result<T>`] alias. All messages carry the `[LLM Service]` suffix to
//! simplify attribution in logs.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, LlmServiceError>;

/// Top-level error for the `llm-service` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LlmServiceError {
    /// Configuration/validation errors (startup/readiness).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Underlying HTTP transport error.
    #[error("[LLM Service] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream returned a non-successful HTTP status.
    #[error("[LLM Service] unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("[LLM Service] failed to decode response: {0}")]
    Decode(String),
}

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[LLM Service] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (like ports, limits, timeouts).
    #[error("[LLM Service] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `LLM_MAX_TOKENS`, `OLLAMA_PORT`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u32`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[LLM Service] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `OLLAMA_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },

    /// A numeric field was outside of the allowed range.
    #[error("[LLM Service] {field} is out of range: {detail}")]
    OutOfRange {
        /// Field name (e.g., `temperature`).
        field: &'static str,
        /// Description of the expected range (e.g., `expected 0.0..=1.0`).
        detail: &'static str,
    },

    /// Model name was empty or invalid.
    #[error("[LLM Service] model name must not be empty")]
    EmptyModel,

    /// Stop sequences contained one or more empty strings.
    #[error("[LLM Service] stop sequences must not contain empty strings")]
    InvalidStopSequence,
}

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`ConfigError::MissingVar`] if the variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Parses an optional `u32` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not a
/// valid `u32`.
pub fn env_opt_u32(name: &'static str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<u32>().map(Some).map_err(|_| {
            LlmServiceError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u32",
            })
        }),
        _ => Ok(None),
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Validates that a floating-point value lies within an inclusive range.
///
/// Useful for parameters like `temperature` or `top_p` (`0.0..=1.0`).
pub fn validate_range_f32(field: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            detail: "expected value in inclusive range",
        }
        .into())
    }
}

/// Ensures stop sequences contain no empty strings.
pub fn validate_stop_sequences<S>(stops: &[S]) -> Result<()>
where
    S: AsRef<str>,
{
    if stops.iter().any(|s| s.as_ref().is_empty()) {
        Err(ConfigError::InvalidStopSequence.into())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_validation() {
        assert!(validate_http_endpoint("OLLAMA_URL", "http://localhost:11434").is_ok());
        assert!(validate_http_endpoint("OLLAMA_URL", "localhost:11434").is_err());
    }

    #[test]
    fn range_validation() {
        assert!(validate_range_f32("top_p", 0.95, 0.0, 1.0).is_ok());
        assert!(validate_range_f32("top_p", 1.5, 0.0, 1.0).is_err());
        assert!(validate_range_f32("top_p", f32::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn stop_sequence_validation() {
        assert!(validate_stop_sequences(&["User:", "\n\n"]).is_ok());
        assert!(validate_stop_sequences(&["User:", ""]).is_err());
    }
}
