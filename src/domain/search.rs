use async_trait::async_trait;

/// A single book record returned by the catalog.
///
/// Every field is optional on the wire; empty strings are kept as-is and
/// treated as absent when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookItem {
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// Book search seam used by the turn controller.
///
/// Implementations never fail: any error is reported as an empty result list.
#[async_trait]
pub trait BookSearch: Send + Sync {
    async fn search(&self, term: &str, max_results: u32) -> Vec<BookItem>;
}
