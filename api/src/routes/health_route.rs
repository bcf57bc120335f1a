//! GET /health — liveness and backend status.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    /// Whether a live completion backend is configured; `false` means the
    /// mock responder answers every chat.
    pub model_loaded: bool,
    /// The store is in-process, so this is true whenever the service is up.
    pub database_connected: bool,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        model_loaded: state.llm.is_some(),
        database_connected: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_reports_backend_flags() {
        let body = serde_json::to_value(HealthResponse {
            status: "healthy",
            timestamp: Utc::now(),
            model_loaded: false,
            database_connected: true,
        })
        .unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["model_loaded"], false);
        assert_eq!(body["database_connected"], true);
    }
}
