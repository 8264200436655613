use crate::infrastructure::AppState;
use crate::transcript::html::entry_id;
use crate::transcript::{Transcript, TranscriptEntry};
use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TranscriptQuery {
    /// Only return entries from this index on
    pub since: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RenderedEntry {
    pub index: usize,
    #[serde(flatten)]
    pub entry: TranscriptEntry,
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptView {
    pub total: usize,
    pub scroll_anchor: Option<String>,
    pub entries: Vec<RenderedEntry>,
}

impl TranscriptView {
    pub fn new(transcript: &Transcript, since: usize) -> Self {
        let entries = transcript
            .since(since)
            .iter()
            .enumerate()
            .map(|(offset, entry)| {
                let index = since + offset;
                RenderedEntry {
                    index,
                    entry: entry.clone(),
                    html: entry.to_html(index),
                }
            })
            .collect();

        Self {
            total: transcript.len(),
            scroll_anchor: transcript.scroll_anchor().map(entry_id),
            entries,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/transcript",
    params(TranscriptQuery),
    responses(
        (status = 200, description = "Transcript entries rendered as HTML fragments")
    )
)]
pub async fn get_transcript(
    State(state): State<AppState>,
    Query(params): Query<TranscriptQuery>,
) -> impl IntoResponse {
    let transcript = state.transcript();
    let transcript = transcript.lock().await;
    Json(TranscriptView::new(&transcript, params.since.unwrap_or(0)))
}
