use crate::error::{BoardError, BoardResult};
use crate::types::*;
use super::Board;

impl Board {
    /// Execute a move and push it onto the history.
    pub fn try_make_move(&mut self, mv: Move) -> BoardResult<GameMove> {
        if !self.is_legal_move(mv) {
            return Err(BoardError::IllegalMove(move_to_algebraic(mv)));
        }

        let moving_piece = self.get_piece(mv.get_source());
        let captured_piece = self.captured_piece(mv, moving_piece);
        let mover = self.current_turn();

        let game_move = GameMove {
            mv,
            moving_piece,
            captured_piece,
            previous_position: self.position,
            previous_half_move_clock: self.half_move_clock,
            previous_full_move_number: self.full_move_number,
        };

        self.position = self.position.make_move_new(mv);

        if moving_piece.is_pawn() || !captured_piece.is_empty() {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock = self.half_move_clock.saturating_add(1);
        }
        if mover == Color::Black {
            self.full_move_number = self.full_move_number.saturating_add(1);
        }

        self.move_history.push(game_move.clone());
        Ok(game_move)
    }

    /// Undo the last move made
    pub fn undo_move(&mut self) -> BoardResult<GameMove> {
        let last_move = self.move_history.pop().ok_or(BoardError::NothingToUndo)?;

        self.position = last_move.previous_position;
        self.half_move_clock = last_move.previous_half_move_clock;
        self.full_move_number = last_move.previous_full_move_number;

        Ok(last_move)
    }

    /// Undo `mv`, refusing if it is not the move on top of the history.
    pub fn undo_checked(&mut self, mv: Move) -> BoardResult<GameMove> {
        match self.move_history.last() {
            None => Err(BoardError::NothingToUndo),
            Some(last) if last.mv != mv => Err(BoardError::MismatchedUndo {
                expected: move_to_algebraic(last.mv),
                found: move_to_algebraic(mv),
            }),
            Some(_) => self.undo_move(),
        }
    }

    pub fn game_status(&self) -> GameStatus {
        let side = self.current_turn();
        match self.position.status() {
            chess::BoardStatus::Checkmate => GameStatus::Checkmate(side),
            chess::BoardStatus::Stalemate => GameStatus::Stalemate,
            chess::BoardStatus::Ongoing if self.is_in_check() => GameStatus::Check(side),
            chess::BoardStatus::Ongoing => GameStatus::InProgress,
        }
    }

    fn captured_piece(&self, mv: Move, moving_piece: PieceKind) -> PieceKind {
        let on_target = self.get_piece(mv.get_dest());
        let diagonal = mv.get_source().get_file() != mv.get_dest().get_file();

        // en passant: pawn moves diagonally onto an empty square
        if on_target.is_empty() && moving_piece.is_pawn() && diagonal {
            PieceKind::Pawn
        } else {
            on_target
        }
    }
}
