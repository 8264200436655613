//! Chat transcript - append-only list of rendered turns

pub mod html;
pub mod models;
pub mod renderer;

pub use models::{BookCard, EntryBody, Speaker, TranscriptEntry};
pub use renderer::Transcript;
