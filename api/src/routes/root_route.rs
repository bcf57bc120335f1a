//! GET / — service banner and endpoint index.

use axum::Json;
use serde_json::{Value, json};

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "AI Coding Assistant API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "chat": "POST /chat",
            "history": "GET /history/{user_id}",
            "save": "POST /save/{user_id}",
            "suggest": "GET /suggest/{user_id}",
            "download": "GET /download/code",
            "health": "GET /health"
        }
    }))
}
