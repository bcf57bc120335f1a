use chat_store::ConversationEntry;
use serde::{Deserialize, Serialize};

/// Query parameters for /history/{user_id}.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Maximum entries returned, most recent first.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response payload for /history/{user_id}.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub user_id: String,
    pub count: usize,
    pub history: Vec<ConversationEntry>,
}
