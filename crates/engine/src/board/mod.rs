use crate::error::{BoardError, BoardResult};
use crate::types::*;
use std::str::FromStr;
// Declare submodules
pub mod moves;
pub mod validation;
pub mod state;

/// Chess position with an in-place make/undo history.
///
/// Rules and move generation come from `chess::Board`; this wrapper adds the
/// move history stack, the FEN move counters and the attack queries the
/// search needs.
#[derive(Debug, Clone)]
pub struct Board {
    position: chess::Board,
    move_history: Vec<GameMove>,
    half_move_clock: u16,
    full_move_number: u16,
}

/// Everything observable about a board, for before/after comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub position: chess::Board,
    pub half_move_clock: u16,
    pub full_move_number: u16,
    pub history_len: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            position: chess::Board::default(),
            move_history: Vec::new(),
            half_move_clock: 0,
            full_move_number: 1,
        }
    }

    pub fn from_fen(fen: &str) -> BoardResult<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(BoardError::InvalidFen(format!(
                "expected at least 4 fields, got {}",
                parts.len()
            )));
        }

        let position = chess::Board::from_str(&parts[..4].join(" "))
            .map_err(|e| BoardError::InvalidFen(format!("{}: {}", fen, e)))?;

        let half_move_clock = Self::parse_counter(parts.get(4), 0)?;
        let full_move_number = Self::parse_counter(parts.get(5), 1)?;

        Ok(Self {
            position,
            move_history: Vec::new(),
            half_move_clock,
            full_move_number: full_move_number.max(1),
        })
    }

    fn parse_counter(field: Option<&&str>, default: u16) -> BoardResult<u16> {
        match field {
            None => Ok(default),
            Some(text) => text
                .parse()
                .map_err(|_| BoardError::InvalidFen(format!("bad move counter '{}'", text))),
        }
    }

    pub fn to_fen(&self) -> String {
        // chess::Board prints placement, side, castling and en passant first
        let rendered = self.position.to_string();
        let fields: Vec<&str> = rendered.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            fields.join(" "),
            self.half_move_clock,
            self.full_move_number
        )
    }

    pub fn get_piece(&self, square: Square) -> PieceKind {
        self.position.piece_on(square).into()
    }

    pub fn current_turn(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn is_white_to_move(&self) -> bool {
        self.current_turn() == Color::White
    }

    pub fn half_move_clock(&self) -> u16 {
        self.half_move_clock
    }

    pub fn full_move_number(&self) -> u16 {
        self.full_move_number
    }

    /// Half-moves played since the start of the game.
    pub fn ply_count(&self) -> u32 {
        let ply = (u32::from(self.full_move_number) - 1) * 2;
        if self.is_white_to_move() {
            ply
        } else {
            ply + 1
        }
    }

    pub fn move_history(&self) -> &[GameMove] {
        &self.move_history
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            position: self.position,
            half_move_clock: self.half_move_clock,
            full_move_number: self.full_move_number,
            history_len: self.move_history.len(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
