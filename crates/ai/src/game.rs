//! What the search needs from a game engine, and the bundled board's answer.

use std::error::Error as StdError;
use std::fmt;
use std::ops::{Deref, DerefMut};

use engine::{Board, BoardError, BoardSnapshot, Move, PieceKind, Square};

/// Position queries and in-place make/undo.
///
/// `apply` and `revert` must pair up strictly LIFO: `revert(m)` restores the
/// state that existed right before the matching `apply(m)`.
pub trait GameEngine {
    type Move: Copy + PartialEq + fmt::Display;
    type Square: Copy;
    /// Full observable state, compared before and after a search branch.
    type Snapshot: PartialEq + fmt::Debug;
    type Error: StdError + Send + Sync + 'static;

    /// Legal moves for the side to move.
    fn legal_moves(&self) -> Vec<Self::Move>;
    fn apply(&mut self, mv: Self::Move) -> Result<(), Self::Error>;
    fn revert(&mut self, mv: Self::Move) -> Result<(), Self::Error>;

    /// (origin, destination)
    fn move_squares(mv: Self::Move) -> (Self::Square, Self::Square);
    /// 0-based (file, rank), a1 = (0, 0)
    fn file_rank(square: Self::Square) -> (u8, u8);

    fn piece_at(&self, square: Self::Square) -> PieceKind;
    fn is_attacked_by_opponent(&self, square: Self::Square) -> bool;
    fn is_checkmate(&self) -> bool;
    fn white_to_move(&self) -> bool;
    fn ply_count(&self) -> u32;
    fn snapshot(&self) -> Self::Snapshot;
}

impl GameEngine for Board {
    type Move = Move;
    type Square = Square;
    type Snapshot = BoardSnapshot;
    type Error = BoardError;

    fn legal_moves(&self) -> Vec<Move> {
        self.get_all_legal_moves()
    }

    fn apply(&mut self, mv: Move) -> Result<(), BoardError> {
        self.try_make_move(mv).map(|_| ())
    }

    fn revert(&mut self, mv: Move) -> Result<(), BoardError> {
        self.undo_checked(mv).map(|_| ())
    }

    fn move_squares(mv: Move) -> (Square, Square) {
        (mv.get_source(), mv.get_dest())
    }

    fn file_rank(square: Square) -> (u8, u8) {
        engine::file_rank(square)
    }

    fn piece_at(&self, square: Square) -> PieceKind {
        self.get_piece(square)
    }

    fn is_attacked_by_opponent(&self, square: Square) -> bool {
        self.is_square_attacked_by_opponent(square)
    }

    fn is_checkmate(&self) -> bool {
        Board::is_checkmate(self)
    }

    fn white_to_move(&self) -> bool {
        self.is_white_to_move()
    }

    fn ply_count(&self) -> u32 {
        Board::ply_count(self)
    }

    fn snapshot(&self) -> BoardSnapshot {
        Board::snapshot(self)
    }
}

/// A move applied to a position; reverted on `revert()` or, failing that, on drop.
///
/// The drop path covers early `?` returns and unwinding out of the search body.
pub struct AppliedMove<'a, G: GameEngine> {
    position: &'a mut G,
    mv: G::Move,
    reverted: bool,
}

impl<'a, G: GameEngine> AppliedMove<'a, G> {
    pub fn apply(position: &'a mut G, mv: G::Move) -> Result<Self, G::Error> {
        position.apply(mv)?;
        Ok(Self {
            position,
            mv,
            reverted: false,
        })
    }

    pub fn revert(mut self) -> Result<(), G::Error> {
        self.reverted = true;
        self.position.revert(self.mv)
    }
}

impl<G: GameEngine> Deref for AppliedMove<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        &*self.position
    }
}

impl<G: GameEngine> DerefMut for AppliedMove<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        &mut *self.position
    }
}

impl<G: GameEngine> Drop for AppliedMove<'_, G> {
    fn drop(&mut self) {
        if !self.reverted {
            // nothing useful to do with a failure here
            let _ = self.position.revert(self.mv);
        }
    }
}
