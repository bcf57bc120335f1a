use std::{env, error::Error, sync::Arc};

mod core;
mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    routes::{
        chat::chat_route::chat, download::download_route::download_code, health_route::health,
        history::history_route::history, root_route::root, save::save_route::save_conversation,
        suggest::suggest_route::suggest,
    },
};

pub async fn start() -> Result<(), Box<dyn Error>> {
    let host_url = env::var("API_ADDRESS").map_err(|_| AppError::MissingEnv("API_ADDRESS"))?;

    let state = Arc::new(AppState::from_env());

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/chat", post(chat))
        .route("/history/{user_id}", get(history))
        .route("/save/{user_id}", post(save_conversation))
        .route("/suggest/{user_id}", get(suggest))
        .route("/download/code", get(download_code))
        .with_state(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;

    info!(address = %host_url, "assistant API listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    // Wait for the Ctrl+C signal
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
