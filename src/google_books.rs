use crate::domain::{BookItem, BookSearch, SearchError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
pub const DEFAULT_MAX_RESULTS: u32 = 6;
/// Upper bound accepted by the volumes endpoint
pub const MAX_RESULTS_LIMIT: u32 = 40;

#[derive(Debug, Deserialize)]
struct GoogleBooksResponse {
    items: Option<Vec<GoogleBookItem>>,
}

#[derive(Debug, Deserialize)]
struct GoogleBookItem {
    #[serde(rename = "volumeInfo")]
    volume_info: Option<GoogleVolumeInfo>,
}

#[derive(Debug, Deserialize)]
struct GoogleVolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    description: Option<String>,
    #[serde(rename = "imageLinks")]
    image_links: Option<GoogleImageLinks>,
}

#[derive(Debug, Deserialize)]
struct GoogleImageLinks {
    thumbnail: Option<String>,
}

impl From<GoogleBookItem> for BookItem {
    fn from(item: GoogleBookItem) -> Self {
        let Some(info) = item.volume_info else {
            return BookItem::default();
        };
        BookItem {
            title: info.title,
            authors: info.authors.unwrap_or_default(),
            description: info.description,
            thumbnail_url: info.image_links.and_then(|links| links.thumbnail),
        }
    }
}

/// Clamp a requested page size to what the volumes endpoint accepts
pub fn clamp_max_results(max_results: u32) -> u32 {
    max_results.clamp(1, MAX_RESULTS_LIMIT)
}

/// Client for the Google Books volumes search
#[derive(Clone)]
pub struct GoogleBooksClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleBooksClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn volumes_url(&self, term: &str, max_results: u32) -> String {
        let mut url = format!(
            "{}/books/v1/volumes?q={}&maxResults={}",
            self.base_url,
            urlencoding::encode(term),
            clamp_max_results(max_results)
        );
        if let Some(key) = &self.api_key {
            url.push_str("&key=");
            url.push_str(&urlencoding::encode(key));
        }
        url
    }

    /// Search the catalog, surfacing the failure reason
    pub async fn try_search(
        &self,
        term: &str,
        max_results: u32,
    ) -> Result<Vec<BookItem>, SearchError> {
        let url = self.volumes_url(term, max_results);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SearchError::Status(resp.status().as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| SearchError::Body(e.to_string()))?;

        let parsed: GoogleBooksResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))?;

        Ok(parsed
            .items
            .unwrap_or_default()
            .into_iter()
            .map(BookItem::from)
            .collect())
    }
}

#[async_trait]
impl BookSearch for GoogleBooksClient {
    async fn search(&self, term: &str, max_results: u32) -> Vec<BookItem> {
        match self.try_search(term, max_results).await {
            Ok(items) => {
                tracing::debug!("Google Books returned {} items for '{}'", items.len(), term);
                items
            }
            Err(e) => {
                tracing::warn!("Google Books search for '{}' failed: {}", term, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volumes_url_encodes_term() {
        let client = GoogleBooksClient::new("https://example.test/", None, None);
        assert_eq!(
            client.volumes_url("inauthor:j.k. rowling", 6),
            "https://example.test/books/v1/volumes?q=inauthor%3Aj.k.%20rowling&maxResults=6"
        );
        assert_eq!(
            client.volumes_url("mystery+books", 6),
            "https://example.test/books/v1/volumes?q=mystery%2Bbooks&maxResults=6"
        );
    }

    #[test]
    fn test_volumes_url_clamps_and_appends_key() {
        let client = GoogleBooksClient::new(
            "https://example.test",
            Some("secret".to_string()),
            None,
        );
        assert_eq!(
            client.volumes_url("dune", 500),
            "https://example.test/books/v1/volumes?q=dune&maxResults=40&key=secret"
        );
        assert!(client.volumes_url("dune", 0).contains("maxResults=1"));
    }

    #[test]
    fn test_item_without_volume_info_is_empty() {
        let parsed: GoogleBooksResponse =
            serde_json::from_str(r#"{"items":[{},{"volumeInfo":{"title":"Dune"}}]}"#).unwrap();
        let items: Vec<BookItem> = parsed.items.unwrap().into_iter().map(Into::into).collect();
        assert_eq!(items[0], BookItem::default());
        assert_eq!(items[1].title.as_deref(), Some("Dune"));
        assert!(items[1].authors.is_empty());
    }
}
