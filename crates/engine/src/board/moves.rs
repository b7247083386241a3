use crate::error::{BoardError, BoardResult};
use crate::types::*;
use super::Board;
use chess::MoveGen;

impl Board {

    /// All legal moves for the side to move, in generator order.
    pub fn get_all_legal_moves(&self) -> Vec<Move> {
        MoveGen::new_legal(&self.position).collect()
    }

    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.position.legal(mv)
    }

    /// Look up a legal move by long algebraic notation ("e2e4", "e7e8q").
    pub fn parse_move(&self, notation: &str) -> BoardResult<Move> {
        self.get_all_legal_moves()
            .into_iter()
            .find(|&mv| move_to_algebraic(mv) == notation)
            .ok_or_else(|| BoardError::IllegalMove(notation.to_string()))
    }
}
