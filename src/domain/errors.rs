//! Domain error types
//!
//! A search failure is the only error kind in the system. It is recovered
//! inside the search client and never reaches the turn controller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Request could not be sent or no response arrived
    #[error("Transport error: {0}")]
    Transport(String),
    /// Catalog answered with a non-success status
    #[error("Catalog returned status {0}")]
    Status(u16),
    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),
    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
