//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no Axum, no reqwest).
//! Only the search seam and domain error types.

pub mod errors;
pub mod search;

pub use errors::SearchError;
pub use search::{BookItem, BookSearch};
