//! Services Layer
//!
//! This module contains the turn orchestration extracted from HTTP handlers.
//! Handlers stay thin and call into the controller.

pub mod turn_service;

// Re-export for convenience
pub use turn_service::*;
