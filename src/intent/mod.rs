//! Intent layer - turns free text into a book query
//!
//! The classifier is a coarse regex heuristic kept behind a single pure
//! function so it can be swapped without touching rendering or networking.

pub mod classifier;
pub mod models;

pub use classifier::classify;
pub use models::{Query, QueryKind};
