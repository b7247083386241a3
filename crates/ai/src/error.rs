//! Error types for move selection

use std::error::Error as StdError;
use thiserror::Error;

/// Errors that can occur while choosing a move
#[derive(Error, Debug)]
pub enum SearchError {
    /// Side to move has no legal moves (checkmate or stalemate)
    #[error("No legal moves in the current position")]
    NoLegalMoves,

    /// Position differed after apply/revert of a search branch
    #[error("Position not restored after searching {mv}")]
    InconsistentRevert { mv: String },

    /// Accumulated score left the i32 range
    #[error("Score overflow while accumulating evaluations")]
    ScoreOverflow,

    /// Budget passed to a direct evaluation is above the configured maximum
    #[error("Search budget {budget} exceeds max_budget {max}")]
    BudgetExceeded { budget: u32, max: u32 },

    /// Configuration rejected at construction
    #[error("Invalid search config: {0}")]
    InvalidConfig(String),

    /// Error reported by the game engine while applying or reverting a move
    #[error("Game engine error: {0}")]
    Collaborator(#[source] Box<dyn StdError + Send + Sync>),
}

impl SearchError {
    pub fn collaborator<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Collaborator(Box::new(error))
    }
}

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;
