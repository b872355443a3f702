//! Error kinds for the engine, per `spec.md` §7.

use thiserror::Error;

/// Every error the engine can report. `SearchOverflow` is treated as a
/// sizing error by callers, not a recoverable condition; the rest are
/// ordinary parse/construction failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpiderError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("deck inconsistent: {0}")]
    DeckInconsistent(String),

    #[error("search overflow: exceeded the pre-allocated successor arena (capacity {capacity})")]
    SearchOverflow { capacity: usize },

    #[error("pool exhausted: needed {needed} more cards to fill unknown slots, pool had {available}")]
    PoolExhausted { needed: usize, available: usize },

    #[error("move limit exceeded: reached the {0}-move cap during search")]
    MoveLimitExceeded(usize),
}
