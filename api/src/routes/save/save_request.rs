use chat_store::ChatTurn;
use serde::{Deserialize, Serialize};

/// Request payload for /save/{user_id}.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    /// Caller-supplied session id; derived deterministically when absent.
    #[serde(default)]
    pub session_id: Option<String>,
    pub messages: Vec<ChatTurn>,
}

/// Response payload for /save/{user_id}.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    pub session_id: String,
}
