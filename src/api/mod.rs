pub mod chat;
pub mod health;
pub mod transcript;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Conversation
        .route("/chat", post(chat::chat))
        .route("/transcript", get(transcript::get_transcript))
        .with_state(state)
}
