//! POST /save/{user_id} — persist an externally assembled conversation.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use chat_store::{ConversationEntry, session_id};
use chrono::Utc;
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::save::save_request::{SaveRequest, SaveResponse},
};

/// Handler: POST /save/{user_id}
///
/// Ensures a profile exists for the user, then appends the entry. The
/// session id is deterministic over user and timestamp unless the caller
/// supplies one.
pub async fn save_conversation(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(body): Json<SaveRequest>,
) -> AppResult<Json<SaveResponse>> {
    if body.messages.is_empty() {
        return Err(AppError::BadRequest("messages must not be empty".into()));
    }

    let now = Utc::now();
    let session = body
        .session_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| session_id(&user_id, now));

    state.store.ensure_profile(&user_id).await;
    state
        .store
        .append_conversation(ConversationEntry {
            user_id: user_id.clone(),
            session_id: session.clone(),
            messages: body.messages,
            created_at: now,
        })
        .await;

    info!(%user_id, session_id = %session, "conversation saved");

    Ok(Json(SaveResponse {
        status: "saved",
        session_id: session,
    }))
}
