use crate::api::transcript::TranscriptView;
use crate::infrastructure::AppState;
use crate::intent::Query;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
    /// First transcript index the caller has not seen yet
    pub since: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub query: Query,
    #[serde(flatten)]
    pub transcript: TranscriptView,
}

#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Turn completed; new transcript entries returned"),
        (status = 400, description = "Message is blank")
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> impl IntoResponse {
    let since = match payload.since {
        Some(since) => since,
        None => state.transcript().lock().await.len(),
    };

    let Some(query) = state.controller.handle_submit(&payload.message).await else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Message must not be empty" })),
        )
            .into_response();
    };

    let transcript = state.transcript();
    let transcript = transcript.lock().await;
    (
        StatusCode::OK,
        Json(ChatResponse {
            query,
            transcript: TranscriptView::new(&transcript, since),
        }),
    )
        .into_response()
}
