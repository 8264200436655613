//! Turn Service - one user message in, one rendered response out

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::Instrument;

use crate::domain::BookSearch;
use crate::google_books::DEFAULT_MAX_RESULTS;
use crate::intent::{Query, classify};
use crate::transcript::{Speaker, Transcript};

pub const SEARCHING_MESSAGE: &str = "Searching for books...";
pub const CLOSING_MESSAGE: &str =
    "You're welcome! 📚 Would you like more recommendations or save these?";

/// Drives a turn: classify, search, render.
///
/// The transcript lock is taken per append and released before the search
/// await, so overlapping turns interleave their entries step by step.
pub struct TurnController {
    search: Arc<dyn BookSearch>,
    transcript: Arc<Mutex<Transcript>>,
    max_results: u32,
    turns: AtomicU64,
}

impl TurnController {
    pub fn new(search: Arc<dyn BookSearch>) -> Self {
        Self::with_transcript(search, Arc::new(Mutex::new(Transcript::new())))
    }

    pub fn with_transcript(search: Arc<dyn BookSearch>, transcript: Arc<Mutex<Transcript>>) -> Self {
        Self {
            search,
            transcript,
            max_results: DEFAULT_MAX_RESULTS,
            turns: AtomicU64::new(0),
        }
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn transcript(&self) -> Arc<Mutex<Transcript>> {
        self.transcript.clone()
    }

    /// Run one turn for `text`. Blank input is ignored and returns `None`.
    pub async fn handle_submit(&self, text: &str) -> Option<Query> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("Ignoring blank submission");
            return None;
        }

        let turn = self.turns.fetch_add(1, Ordering::SeqCst) + 1;
        let span = tracing::info_span!("turn", turn, kind = tracing::field::Empty);
        self.run_turn(text).instrument(span).await
    }

    async fn run_turn(&self, text: &str) -> Option<Query> {
        self.render_text(text, Speaker::User).await;
        self.render_text(SEARCHING_MESSAGE, Speaker::Bot).await;

        let query = classify(text);
        tracing::Span::current().record("kind", query.kind.as_str());
        let term = query.search_term();
        tracing::info!(term = %term, "Searching catalog");

        let items = self.search.search(&term, self.max_results).await;
        tracing::info!("Rendering {} results", items.len());

        self.transcript.lock().await.render_results(&items);
        self.render_text(CLOSING_MESSAGE, Speaker::Bot).await;

        Some(query)
    }

    async fn render_text(&self, text: &str, speaker: Speaker) {
        self.transcript.lock().await.render_text(text, speaker);
    }
}
