/// Configuration for a text-completion invocation.
///
/// This struct holds both the endpoint and the sampling parameters; it can
/// be extended as needed to support new backends or features.
///
/// # Fields
///
/// - `model`: The model identifier (e.g., `"phi3:mini"`, `"qwen3:14b"`).
/// - `endpoint`: The inference endpoint (local Ollama server URL).
/// - `max_tokens`: Maximum number of tokens to generate.
/// - `temperature`: Controls randomness (0.0 = deterministic).
/// - `top_p`: Nucleus sampling cutoff (alternative to temperature).
/// - `stop`: Stop sequences that terminate generation.
/// - `timeout_secs`: Optional request timeout in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// Model identifier string.
    pub model: String,

    /// Inference endpoint (local server URL).
    pub endpoint: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (controls creativity).
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Stop sequences; generation halts when one is produced.
    pub stop: Vec<String>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
