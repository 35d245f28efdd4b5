use std::collections::TryReserveError;

use thiserror::Error;

/// Error produced when parsing a move.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseMoveError {
    /// Empty string
    #[error("empty move")]
    Empty,
    /// Character that does not name any layer
    #[error("unknown move face {0:?}")]
    UnknownFace(char),
    /// Text after the face that is not a direction
    #[error("bad move suffix {0:?}")]
    BadSuffix(String),
}

/// Error produced by the move queue.
///
/// Both kinds are fatal: the caller should stop its main loop.
#[derive(Error, Debug)]
pub enum MoveQueueError {
    /// Memory for a queued move could not be allocated
    #[error("failed to allocate memory for the move: {0}")]
    Alloc(#[from] TryReserveError),
    /// The renderer reported an error
    #[error("renderer error: {0}")]
    Render(eyre::Report),
}
