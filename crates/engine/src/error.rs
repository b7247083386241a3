//! Error types for board operations
//!
//! Everything the board can refuse: malformed FEN, illegal moves and
//! make/undo calls that break the history stack.

use thiserror::Error;

/// Errors that can occur while loading or mutating a board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// FEN string could not be parsed into a legal position
    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    /// Square notation outside a1..h8
    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    /// Move is not legal in the current position
    #[error("Illegal move: {0}")]
    IllegalMove(String),

    /// Undo requested with an empty move history
    #[error("No moves to undo")]
    NothingToUndo,

    /// Undo requested for a move that is not on top of the history
    #[error("Mismatched undo: last move was {expected}, asked to undo {found}")]
    MismatchedUndo { expected: String, found: String },
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
