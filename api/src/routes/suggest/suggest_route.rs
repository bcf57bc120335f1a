//! GET /suggest/{user_id} — personalized suggestion feed.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use chat_core::{default_feed, derive_topics, personalized_feed};
use chrono::Utc;

use crate::{core::app_state::AppState, routes::suggest::suggest_response::SuggestResponse};

/// Conversation entries scanned for topic keywords.
const TOPIC_HISTORY_ENTRIES: usize = 10;

/// Handler: GET /suggest/{user_id}
///
/// With neither a stored profile nor any history the feed falls back to
/// fixed starter suggestions.
pub async fn suggest(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Json<SuggestResponse> {
    let profile = state.store.profile(&user_id).await;
    let entries = state
        .store
        .recent_conversations(&user_id, TOPIC_HISTORY_ENTRIES)
        .await;

    let suggestions = if profile.is_none() && entries.is_empty() {
        default_feed()
    } else {
        let text: String = entries
            .iter()
            .flat_map(|entry| entry.messages.iter())
            .map(|turn| turn.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let topics = derive_topics(&text);
        let skill_level = profile.map(|p| p.skill_level).unwrap_or_default();
        personalized_feed(&topics, skill_level)
    };

    Json(SuggestResponse {
        user_id,
        suggestions,
        generated_at: Utc::now(),
    })
}
