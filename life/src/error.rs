//! Error types for the life engine.

use thiserror::Error;

/// Errors raised while building or stepping a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Board text did not match its declared dimensions, or held an unknown cell character
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A neighbor count outside 0..=8 was written to a cell
    #[error("invalid neighbor count {0}, expected 0..=8")]
    InvalidNeighborCount(u8),
}

/// Result type for life operations
pub type LifeResult<T> = Result<T, LifeError>;

impl LifeError {
    /// Create a malformed input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }
}
