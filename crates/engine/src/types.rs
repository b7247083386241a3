use crate::error::{BoardError, BoardResult};

pub use chess::{ChessMove as Move, Color, Square};

/// Piece kind without color.
/// Discriminants match the slots of the material tables (0 = empty square).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceKind {
    #[default]
    None = 0,
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_empty(self) -> bool {
        self == PieceKind::None
    }

    pub fn is_pawn(self) -> bool {
        self == PieceKind::Pawn
    }
}

impl From<chess::Piece> for PieceKind {
    fn from(piece: chess::Piece) -> Self {
        match piece {
            chess::Piece::Pawn => PieceKind::Pawn,
            chess::Piece::Knight => PieceKind::Knight,
            chess::Piece::Bishop => PieceKind::Bishop,
            chess::Piece::Rook => PieceKind::Rook,
            chess::Piece::Queen => PieceKind::Queen,
            chess::Piece::King => PieceKind::King,
        }
    }
}

impl From<Option<chess::Piece>> for PieceKind {
    fn from(piece: Option<chess::Piece>) -> Self {
        piece.map(PieceKind::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check(Color), // Which color is in check
    Checkmate(Color), // Which color is checkmated (other color wins)
    Stalemate,
}

/// A played move plus everything needed to take it back.
#[derive(Debug, Clone)]
pub struct GameMove {
    pub mv: Move,
    pub moving_piece: PieceKind,
    pub captured_piece: PieceKind,
    pub(crate) previous_position: chess::Board,
    pub(crate) previous_half_move_clock: u16,
    pub(crate) previous_full_move_number: u16,
}

impl GameMove {
    pub fn is_capture(&self) -> bool {
        !self.captured_piece.is_empty()
    }

    pub fn is_en_passant(&self) -> bool {
        self.moving_piece.is_pawn()
            && self.mv.get_source().get_file() != self.mv.get_dest().get_file()
            && self.previous_position.piece_on(self.mv.get_dest()).is_none()
    }

    pub fn is_castling(&self) -> bool {
        let from = self.mv.get_source().get_file().to_index() as i8;
        let to = self.mv.get_dest().get_file().to_index() as i8;
        self.moving_piece == PieceKind::King && (from - to).abs() == 2
    }

    pub fn is_promotion(&self) -> bool {
        self.mv.get_promotion().is_some()
    }
}

/// Parse "e4"-style notation.
pub fn parse_square(notation: &str) -> BoardResult<Square> {
    let invalid = || BoardError::InvalidSquare(notation.to_string());
    let bytes = notation.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let file = bytes[0].wrapping_sub(b'a');
    let rank = bytes[1].wrapping_sub(b'1');
    if file >= 8 || rank >= 8 {
        return Err(invalid());
    }

    Ok(Square::make_square(
        chess::Rank::from_index(rank as usize),
        chess::File::from_index(file as usize),
    ))
}

/// (file, rank), both 0-based from a1.
pub fn file_rank(square: Square) -> (u8, u8) {
    (
        square.get_file().to_index() as u8,
        square.get_rank().to_index() as u8,
    )
}

pub fn square_to_algebraic(square: Square) -> String {
    let (file, rank) = file_rank(square);
    format!("{}{}", (b'a' + file) as char, rank + 1)
}

/// Long algebraic form, "e2e4" / "e7e8q".
pub fn move_to_algebraic(mv: Move) -> String {
    let promotion = match mv.get_promotion() {
        Some(chess::Piece::Queen) => "q",
        Some(chess::Piece::Rook) => "r",
        Some(chess::Piece::Bishop) => "b",
        Some(chess::Piece::Knight) => "n",
        _ => "",
    };
    format!(
        "{}{}{}",
        square_to_algebraic(mv.get_source()),
        square_to_algebraic(mv.get_dest()),
        promotion
    )
}
