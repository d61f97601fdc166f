//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
///
/// A failed draw leaves the deck untouched; there is no partial draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Not enough cards remaining in the deck.
    #[error("not enough cards remaining in the deck")]
    InsufficientCards,
    /// Draw count must be at least one.
    #[error("draw count must be at least one")]
    InvalidCount,
}
