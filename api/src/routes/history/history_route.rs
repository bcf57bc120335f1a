//! GET /history/{user_id} — recent persisted exchanges.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    core::app_state::AppState,
    routes::history::history_request::{HistoryQuery, HistoryResponse},
};

const DEFAULT_LIMIT: usize = 50;

/// Handler: GET /history/{user_id}?limit=10
///
/// Unknown users get an empty list, not an error.
pub async fn history(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let entries = state.store.recent_conversations(&user_id, limit).await;

    Json(HistoryResponse {
        user_id,
        count: entries.len(),
        history: entries,
    })
}
