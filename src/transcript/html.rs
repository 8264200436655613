//! HTML fragments for transcript entries
//!
//! Class names match `static/style.css`. Every piece of text goes through
//! [`escape`], so user input and catalog data render as text content.

use crate::transcript::models::{BookCard, EntryBody, Speaker, TranscriptEntry};
use std::fmt::Write;

/// DOM id of the entry at `index`, used as the scroll target
pub fn entry_id(index: usize) -> String {
    format!("entry-{}", index)
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl TranscriptEntry {
    pub fn to_html(&self, index: usize) -> String {
        let class = match self.speaker {
            Speaker::User => "message user-message",
            Speaker::Bot => "message bot-message",
        };
        let inner = match &self.body {
            EntryBody::Text(text) => escape(text),
            EntryBody::Results(cards) => book_list_html(cards),
        };
        format!(
            r#"<div class="{}" id="{}">{}</div>"#,
            class,
            entry_id(index),
            inner
        )
    }
}

fn book_list_html(cards: &[BookCard]) -> String {
    let mut out = String::from(r#"<div class="book-list">"#);
    for card in cards {
        out.push_str(&card.to_html());
    }
    out.push_str("</div>");
    out
}

impl BookCard {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = write!(
            out,
            r#"<div class="book-item"><img class="book-thumb" src="{}" alt="{}"><div class="book-meta"><div class="book-title">{}</div><div class="book-auth">{}</div>"#,
            escape(&self.cover_url),
            escape(&self.cover_alt),
            escape(&self.title),
            escape(&self.authors),
        );
        if let Some(description) = &self.description {
            let _ = write!(out, r#"<div class="book-desc">{}</div>"#, escape(description));
        }
        out.push_str("</div></div>");
        out
    }
}
