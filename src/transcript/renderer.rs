use crate::domain::BookItem;
use crate::transcript::models::{BookCard, Speaker, TranscriptEntry};

pub const NO_RESULTS_MESSAGE: &str =
    "I couldn't find books for that query. Try another author or genre.";

/// Append-only transcript of rendered turns.
///
/// Entries are never edited or removed. Every append is followed by a
/// scroll to the newest entry.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    scroll_anchor: Option<usize>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain text turn
    pub fn render_text(&mut self, text: &str, speaker: Speaker) {
        self.append(TranscriptEntry::text(speaker, text));
    }

    /// Append one results block, or the "no results" turn for an empty list
    pub fn render_results(&mut self, items: &[BookItem]) {
        if items.is_empty() {
            self.render_text(NO_RESULTS_MESSAGE, Speaker::Bot);
            return;
        }
        let cards = items.iter().map(BookCard::from).collect();
        self.append(TranscriptEntry::results(cards));
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_anchor = self.entries.len().checked_sub(1);
    }

    fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
        self.scroll_to_bottom();
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Entries appended at or after `index`
    pub fn since(&self, index: usize) -> &[TranscriptEntry] {
        self.entries.get(index..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry the view is scrolled to
    pub fn scroll_anchor(&self) -> Option<usize> {
        self.scroll_anchor
    }
}
