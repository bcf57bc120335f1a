//! POST /chat — one assistant exchange.

use std::sync::Arc;

use axum::{Json, extract::State};
use chat_core::{ChatResponse, build_context, build_prompt, mock_completion, postprocess_response};
use chat_store::{ChatTurn, ConversationEntry, Role, session_id};
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::chat::chat_request::ChatRequest,
};

/// Conversation entries folded into the prompt history.
const PROMPT_HISTORY_ENTRIES: usize = 5;

/// Handler: POST /chat
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/chat \
///   -H 'content-type: application/json' \
///   -d '{"message":"How do I read a file in Python?","user_id":"alice"}'
/// ```
#[instrument(name = "chat_route", skip(state, body), fields(user_id = %body.user_id))]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    if body.message.trim().is_empty() {
        return Err(AppError::BadRequest("message must not be empty".into()));
    }

    let anonymous = body.user_id == "anonymous";

    // Profile and history lookups are skipped for anonymous callers.
    let (profile, history) = if anonymous {
        (None, Vec::new())
    } else {
        let profile = state.store.profile(&body.user_id).await;
        let entries = state
            .store
            .recent_conversations(&body.user_id, PROMPT_HISTORY_ENTRIES)
            .await;
        // Entries come back most-recent-first; the prompt wants
        // chronological turns.
        let turns: Vec<ChatTurn> = entries
            .iter()
            .rev()
            .flat_map(|entry| entry.messages.iter().cloned())
            .collect();
        (profile, turns)
    };

    let context = build_context(&body.overrides(), profile.as_ref());
    let prompt = build_prompt(&body.message, &context, &history);

    let raw = match &state.llm {
        Some(llm) => match llm.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "completion failed, falling back to mock response");
                mock_completion(&body.message).to_string()
            }
        },
        None => mock_completion(&body.message).to_string(),
    };

    let response = postprocess_response(&raw, &body.message);

    if !anonymous {
        let now = Utc::now();
        let entry = ConversationEntry {
            user_id: body.user_id.clone(),
            session_id: session_id(&body.user_id, now),
            messages: vec![
                ChatTurn {
                    role: Role::User,
                    content: body.message.clone(),
                    timestamp: now,
                },
                ChatTurn {
                    role: Role::Assistant,
                    content: response.response.clone(),
                    timestamp: now,
                },
            ],
            created_at: now,
        };
        state.store.append_conversation(entry).await;
        info!(user_id = %body.user_id, "exchange persisted");
    }

    Ok(Json(response))
}
