use crate::types::*;
use super::Board;
use chess::{get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves, Piece, EMPTY};

impl Board {
    /// Check if `square` is attacked by any piece of `by_color`.
    /// Occupancy is taken as-is, so a piece standing on `square` still blocks nothing behind it.
    pub fn is_under_threat(&self, square: Square, by_color: Color) -> bool {
        let board = &self.position;
        let attackers = *board.color_combined(by_color);
        let occupied = *board.combined();

        let pawns = *board.pieces(Piece::Pawn) & attackers;
        let knights = *board.pieces(Piece::Knight) & attackers;
        let kings = *board.pieces(Piece::King) & attackers;
        let queens = *board.pieces(Piece::Queen);
        let diagonal = (*board.pieces(Piece::Bishop) | queens) & attackers;
        let axial = (*board.pieces(Piece::Rook) | queens) & attackers;

        // a pawn of the other color on `square` would capture exactly the attacking pawns
        get_pawn_attacks(square, !by_color, pawns) != EMPTY
            || get_knight_moves(square) & knights != EMPTY
            || get_king_moves(square) & kings != EMPTY
            || get_bishop_moves(square, occupied) & diagonal != EMPTY
            || get_rook_moves(square, occupied) & axial != EMPTY
    }

    /// Attacked by the side that is *not* to move.
    pub fn is_square_attacked_by_opponent(&self, square: Square) -> bool {
        self.is_under_threat(square, !self.current_turn())
    }

    pub fn is_in_check(&self) -> bool {
        *self.position.checkers() != EMPTY
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.status() == chess::BoardStatus::Checkmate
    }
}
