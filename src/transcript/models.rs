use crate::domain::BookItem;
use serde::Serialize;

pub const DESCRIPTION_LIMIT: usize = 180;
pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_AUTHOR: &str = "Unknown author";
pub const COVER_PLACEHOLDER: &str = "data:image/svg+xml;utf8,<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"48\" height=\"68\"><rect width=\"100%\" height=\"100%\" fill=\"%23022a3c\"/></svg>";

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum EntryBody {
    Text(String),
    Results(Vec<BookCard>),
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    #[serde(flatten)]
    pub body: EntryBody,
}

impl TranscriptEntry {
    pub fn text(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            body: EntryBody::Text(text.into()),
        }
    }

    pub fn results(cards: Vec<BookCard>) -> Self {
        Self {
            speaker: Speaker::Bot,
            body: EntryBody::Results(cards),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.body {
            EntryBody::Text(text) => Some(text),
            EntryBody::Results(_) => None,
        }
    }

    pub fn cards(&self) -> Option<&[BookCard]> {
        match &self.body {
            EntryBody::Results(cards) => Some(cards),
            EntryBody::Text(_) => None,
        }
    }
}

/// Display-ready book card with every fallback applied
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub cover_url: String,
    pub cover_alt: String,
    pub title: String,
    pub authors: String,
    pub description: Option<String>,
}

impl From<&BookItem> for BookCard {
    fn from(item: &BookItem) -> Self {
        let title = non_empty(item.title.as_deref());

        let joined = item.authors.join(", ");
        let authors = non_empty(Some(joined.as_str()))
            .unwrap_or(UNKNOWN_AUTHOR)
            .to_string();

        BookCard {
            cover_url: non_empty(item.thumbnail_url.as_deref())
                .unwrap_or(COVER_PLACEHOLDER)
                .to_string(),
            cover_alt: title.unwrap_or("cover").to_string(),
            title: title.unwrap_or(UNTITLED).to_string(),
            authors,
            description: non_empty(item.description.as_deref()).map(truncate_description),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Cut to `DESCRIPTION_LIMIT` characters, appending "..." only when something was cut
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_description_boundary() {
        let exact = "a".repeat(180);
        assert_eq!(truncate_description(&exact), exact);

        let over = "b".repeat(181);
        let truncated = truncate_description(&over);
        assert_eq!(truncated, format!("{}...", "b".repeat(180)));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let accented = "é".repeat(181);
        let truncated = truncate_description(&accented);
        assert_eq!(truncated.chars().count(), 183);
        assert!(truncated.ends_with("é..."));
    }

    #[test]
    fn test_card_fallbacks() {
        let card = BookCard::from(&BookItem::default());
        assert_eq!(card.title, UNTITLED);
        assert_eq!(card.authors, UNKNOWN_AUTHOR);
        assert_eq!(card.cover_url, COVER_PLACEHOLDER);
        assert_eq!(card.cover_alt, "cover");
        assert_eq!(card.description, None);
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let item = BookItem {
            title: Some(String::new()),
            authors: vec![],
            description: Some(String::new()),
            thumbnail_url: Some(String::new()),
        };
        let card = BookCard::from(&item);
        assert_eq!(card.title, UNTITLED);
        assert_eq!(card.authors, UNKNOWN_AUTHOR);
        assert_eq!(card.cover_url, COVER_PLACEHOLDER);
        assert_eq!(card.description, None);

        let blank_author = BookItem {
            authors: vec![String::new()],
            ..Default::default()
        };
        assert_eq!(BookCard::from(&blank_author).authors, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_card_from_full_item() {
        let item = BookItem {
            title: Some("Good Omens".to_string()),
            authors: vec!["Terry Pratchett".to_string(), "Neil Gaiman".to_string()],
            description: Some("The world ends on a Saturday.".to_string()),
            thumbnail_url: Some("http://books.google.com/thumb?id=1".to_string()),
        };
        let card = BookCard::from(&item);
        assert_eq!(card.title, "Good Omens");
        assert_eq!(card.cover_alt, "Good Omens");
        assert_eq!(card.authors, "Terry Pratchett, Neil Gaiman");
        assert_eq!(card.cover_url, "http://books.google.com/thumb?id=1");
        assert_eq!(
            card.description.as_deref(),
            Some("The world ends on a Saturday.")
        );
    }
}
