use std::fmt;

/// Material values indexed by `PieceKind::index()`
pub const PIECE_VALUES: [i32; 7] = [
    0,     // Empty
    100,   // Pawn
    300,   // Knight
    300,   // Bishop
    500,   // Rook
    900,   // Queen
    10000, // King
];

/// Flat bonus for any pawn move
pub const PAWN_ADVANCE_BONUS: i32 = 10;

/// Flat bonus for landing on c3..f6
pub const CENTER_BONUS: i32 = 10;

/// Default search budget in ply
pub const DEFAULT_SEARCH_BUDGET: u32 = 2;

/// Largest budget a config may ask for; node count grows as branching^(budget + 1)
pub const MAX_SEARCH_BUDGET: u32 = 4;

/// A root move and the score the search gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatedMove<M> {
    mv: M,
    score: i32,
}

impl<M: Copy> EvaluatedMove<M> {
    pub fn new(mv: M, score: i32) -> Self {
        Self { mv, score }
    }

    pub fn mv(&self) -> M {
        self.mv
    }

    pub fn score(&self) -> i32 {
        self.score
    }
}

impl<M: fmt::Display> fmt::Display for EvaluatedMove<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.mv, self.score)
    }
}

/// Outcome of one decision: chosen move plus every root evaluation, best first.
#[derive(Debug, Clone)]
pub struct SearchReport<M> {
    pub best_move: M,
    pub evaluations: Vec<EvaluatedMove<M>>,
    pub nodes_searched: u64,
}

impl<M: Copy> SearchReport<M> {
    pub fn best_score(&self) -> i32 {
        self.evaluations.first().map(EvaluatedMove::score).unwrap_or_default()
    }

    pub fn score_of(&self, mv: M) -> Option<i32>
    where
        M: PartialEq,
    {
        self.evaluations
            .iter()
            .find(|e| e.mv() == mv)
            .map(EvaluatedMove::score)
    }
}
