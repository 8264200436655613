//! Application state containing the turn controller and shared resources

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::BookSearch;
use crate::google_books::GoogleBooksClient;
use crate::infrastructure::config::Config;
use crate::services::TurnController;
use crate::transcript::Transcript;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Turn controller owning the session transcript
    pub controller: Arc<TurnController>,
}

impl AppState {
    /// Create a new AppState around any search backend
    pub fn new(search: Arc<dyn BookSearch>, max_results: u32) -> Self {
        let controller = TurnController::new(search).max_results(max_results);
        Self {
            controller: Arc::new(controller),
        }
    }

    /// Create the production state talking to Google Books
    pub fn from_config(config: &Config) -> Self {
        let client = GoogleBooksClient::new(
            &config.google_books_url,
            config.google_books_api_key.clone(),
            config.search_timeout,
        );
        Self::new(Arc::new(client), config.max_results)
    }

    /// Get the shared transcript
    pub fn transcript(&self) -> Arc<Mutex<Transcript>> {
        self.controller.transcript()
    }
}
