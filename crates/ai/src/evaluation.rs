use engine::PieceKind;

use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};
use crate::game::GameEngine;
use crate::types::*;

pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.index()]
}

/// Files c..f and ranks 3..6, 0-based.
pub fn is_central(file: u8, rank: u8) -> bool {
    (2..=5).contains(&file) && (2..=5).contains(&rank)
}

/// Expected loss when the moved piece is taken: half its value.
/// Every table entry is even, so halving is exact.
pub fn risk_penalty(moving: PieceKind) -> i32 {
    piece_value(moving) / 2
}

/// What a move looks like before it is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveFeatures {
    pub captured: PieceKind,
    pub moving: PieceKind,
    pub central: bool,
    pub risky: bool,
}

impl MoveFeatures {
    /// Must run on the pre-move position.
    pub fn gather<G: GameEngine>(position: &G, mv: G::Move) -> Self {
        let (from, to) = G::move_squares(mv);
        let (file, rank) = G::file_rank(to);

        Self {
            captured: position.piece_at(to),
            moving: position.piece_at(from),
            central: is_central(file, rank),
            risky: position.is_attacked_by_opponent(to),
        }
    }
}

/// Score of a single ply, before any replies are added.
pub fn heuristic_score(
    features: &MoveFeatures,
    gives_mate: bool,
    config: &SearchConfig,
) -> SearchResult<i32> {
    let mut capture = piece_value(features.captured);
    if let Some(target) = config.revenge_target {
        if target.kind == features.captured {
            capture = capture
                .checked_mul(target.multiplier)
                .ok_or(SearchError::ScoreOverflow)?;
        }
    }

    let terms = [
        capture,
        if gives_mate { piece_value(PieceKind::King) } else { 0 },
        if features.moving.is_pawn() { PAWN_ADVANCE_BONUS } else { 0 },
        if features.central { CENTER_BONUS } else { 0 },
        if features.risky { -risk_penalty(features.moving) } else { 0 },
    ];

    terms
        .iter()
        .try_fold(0i32, |total, &term| total.checked_add(term))
        .ok_or(SearchError::ScoreOverflow)
}
