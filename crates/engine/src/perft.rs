use crate::error::BoardResult;
use crate::{move_to_algebraic, Board, Move};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerftResult {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
    pub time_ms: u128,
}

impl PerftResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes_per_second(&self) -> u64 {
        if self.time_ms == 0 {
            return 0;
        }
        (self.nodes * 1000) / (self.time_ms as u64)
    }

    fn absorb(&mut self, other: &PerftResult) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.en_passant += other.en_passant;
        self.castles += other.castles;
        self.promotions += other.promotions;
        self.checks += other.checks;
        self.checkmates += other.checkmates;
    }
}

#[derive(Debug)]
pub struct PerftTestCase {
    pub name: &'static str,
    pub fen: &'static str,
    pub depth: u32,
    pub expected_nodes: u64,
}

pub const PERFT_SUITE: &[PerftTestCase] = &[
    PerftTestCase {
        name: "Starting position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depth: 3,
        expected_nodes: 8902,
    },
    PerftTestCase {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depth: 2,
        expected_nodes: 2039,
    },
    PerftTestCase {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depth: 3,
        expected_nodes: 2812,
    },
];

/// Count leaf nodes by walking the tree with make/undo on a single board.
pub fn perft(board: &mut Board, depth: u32) -> BoardResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let mut nodes = 0;
    for mv in board.get_all_legal_moves() {
        board.try_make_move(mv)?;
        nodes += perft(board, depth - 1)?;
        board.undo_checked(mv)?;
    }

    Ok(nodes)
}

/// Detailed perft that tracks different move types
pub fn perft_detailed(board: &mut Board, depth: u32) -> BoardResult<PerftResult> {
    let start_time = Instant::now();
    let mut result = perft_detailed_inner(board, depth)?;
    result.time_ms = start_time.elapsed().as_millis();
    Ok(result)
}

fn perft_detailed_inner(board: &mut Board, depth: u32) -> BoardResult<PerftResult> {
    let mut result = PerftResult::new();

    if depth == 0 {
        result.nodes = 1;
        return Ok(result);
    }

    for mv in board.get_all_legal_moves() {
        let game_move = board.try_make_move(mv)?;

        if depth == 1 {
            result.nodes += 1;
            // Count move types at depth 1
            if game_move.is_capture() {
                result.captures += 1;
            }
            if game_move.is_en_passant() {
                result.en_passant += 1;
            }
            if game_move.is_castling() {
                result.castles += 1;
            }
            if game_move.is_promotion() {
                result.promotions += 1;
            }
            if board.is_in_check() {
                result.checks += 1;
            }
            if board.is_checkmate() {
                result.checkmates += 1;
            }
        } else {
            let sub_result = perft_detailed_inner(board, depth - 1)?;
            result.absorb(&sub_result);
        }

        board.undo_checked(mv)?;
    }

    Ok(result)
}

/// Node count per root move.
pub fn perft_divide(board: &mut Board, depth: u32) -> BoardResult<Vec<(Move, u64)>> {
    let mut results = Vec::new();
    if depth == 0 {
        return Ok(results);
    }

    for mv in board.get_all_legal_moves() {
        board.try_make_move(mv)?;
        let nodes = perft(board, depth - 1)?;
        board.undo_checked(mv)?;
        results.push((mv, nodes));
    }

    results.sort_by_key(|(mv, _)| move_to_algebraic(*mv));
    Ok(results)
}
