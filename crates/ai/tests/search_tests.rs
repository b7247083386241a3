use ai::{heuristic_score, Accumulation, MoveFeatures, SearchConfig, SearchEngine, SearchError};
use engine::{move_to_algebraic, Board};
use rand::rngs::StdRng;
use rand::SeedableRng;

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R w KQkq - 4 4";
const SPECIAL_MOVES: &str = "r3k2r/1P6/8/3pP3/8/8/8/R3K2R w KQkq d6 0 2";
const BACK_RANK_MATE: &str = "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1";
const HANGING_QUEEN: &str = "7k/8/8/3q4/8/4P3/8/K2R4 w - - 0 1";

fn seeded(config: SearchConfig, seed: u64) -> SearchEngine {
    SearchEngine::with_config(config, StdRng::seed_from_u64(seed)).unwrap()
}

fn assert_position_invariant(fen: &str, budgets: &[u32]) {
    let mut board = Board::from_fen(fen).unwrap();
    let snapshot = board.snapshot();
    let fen_before = board.to_fen();
    // let the search run unchecked so only the board itself is under test
    let mut engine = seeded(SearchConfig::default().with_verify_reverts(false), 3);

    for &budget in budgets {
        for mv in board.get_all_legal_moves() {
            let white = board.is_white_to_move();
            engine.evaluate_move(&mut board, mv, white, budget).unwrap();
            assert_eq!(board.snapshot(), snapshot, "{} at budget {}", move_to_algebraic(mv), budget);
            assert_eq!(board.to_fen(), fen_before);
        }
    }
}

#[test]
fn search_leaves_starting_position_untouched() {
    assert_position_invariant(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[0, 1, 2],
    );
}

#[test]
fn search_leaves_middlegame_untouched() {
    assert_position_invariant(MIDDLEGAME, &[0, 1]);
}

#[test]
fn search_leaves_castling_promotion_and_en_passant_untouched() {
    assert_position_invariant(SPECIAL_MOVES, &[0, 1]);
}

#[test]
fn choose_move_restores_position() {
    let mut board = Board::from_fen(MIDDLEGAME).unwrap();
    let before = board.snapshot();
    let mut engine = seeded(SearchConfig::default(), 11);

    let chosen = engine.choose_move(&mut board).unwrap();

    assert_eq!(board.snapshot(), before);
    assert!(board.get_all_legal_moves().contains(&chosen));
}

#[test]
fn same_seed_same_ordering() {
    let mut board = Board::from_fen(MIDDLEGAME).unwrap();
    let config = SearchConfig::default().with_max_budget(1);

    let first = seeded(config.clone(), 2024).analyze(&mut board).unwrap();
    let second = seeded(config, 2024).analyze(&mut board).unwrap();

    assert_eq!(first.evaluations, second.evaluations);
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.nodes_searched, second.nodes_searched);
}

#[test]
fn evaluations_are_sorted_best_first() {
    let mut board = Board::new();
    let report = seeded(SearchConfig::default(), 5).analyze(&mut board).unwrap();

    assert_eq!(report.evaluations.len(), 20);
    assert!(report
        .evaluations
        .windows(2)
        .all(|pair| pair[0].score() >= pair[1].score()));
    assert_eq!(report.best_move, report.evaluations[0].mv());
    // 20 root moves, 400 replies, 8902 third-ply moves
    assert_eq!(report.nodes_searched, 20 + 400 + 8902);
}

#[test]
fn ties_keep_generation_order() {
    let mut board = Board::from_fen(MIDDLEGAME).unwrap();
    let generated = board.get_all_legal_moves();
    let config = SearchConfig::default().with_max_budget(0).without_jitter();

    let report = seeded(config, 1).analyze(&mut board).unwrap();

    for pair in report.evaluations.windows(2) {
        if pair[0].score() == pair[1].score() {
            let a = generated.iter().position(|&m| m == pair[0].mv()).unwrap();
            let b = generated.iter().position(|&m| m == pair[1].mv()).unwrap();
            assert!(a < b);
        }
    }
}

#[test]
fn budget_zero_matches_single_ply_heuristic() {
    let mut board = Board::from_fen(MIDDLEGAME).unwrap();
    let config = SearchConfig::default();
    let mut engine = seeded(config.clone(), 8);

    for mv in board.get_all_legal_moves() {
        let features = MoveFeatures::gather(&board, mv);
        let mut probe = board.clone();
        probe.try_make_move(mv).unwrap();
        let expected = heuristic_score(&features, probe.is_checkmate(), &config).unwrap();

        assert_eq!(engine.evaluate_move(&mut board, mv, true, 0).unwrap(), expected);
    }
}

#[test]
fn budget_zero_root_still_jitters_within_range() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
    let mut engine = seeded(SearchConfig::default().with_max_budget(0), 77);
    let push = board.parse_move("e2e4").unwrap();

    for _ in 0..50 {
        let score = engine.evaluate_move(&mut board, push, true, 0).unwrap();
        assert!((0..40).contains(&score), "{}", score);
    }
}

#[test]
fn prefers_mate_in_one() {
    let mut board = Board::from_fen(BACK_RANK_MATE).unwrap();
    let mate = board.parse_move("a1a8").unwrap();

    for seed in 0..5 {
        let mut engine = seeded(SearchConfig::default().with_max_budget(1), seed);
        let report = engine.analyze(&mut board).unwrap();
        assert_eq!(report.best_move, mate);
        assert!(report.best_score() >= 10_000 - 20);
    }
}

#[test]
fn default_budget_can_pass_over_mate_in_one() {
    // replies and counter-replies are summed, so a quiet rook move with many
    // mating continuations outscores the immediate mate
    for accumulation in [Accumulation::Additive, Accumulation::Negamax] {
        let mut board = Board::from_fen(BACK_RANK_MATE).unwrap();
        let mate = board.parse_move("a1a8").unwrap();
        let config = SearchConfig::default()
            .without_jitter()
            .with_accumulation(accumulation);
        let mut engine = seeded(config, 0);

        let report = engine.analyze(&mut board).unwrap();
        // mate leaves no replies to add
        assert_eq!(report.score_of(mate), Some(10_000), "{:?}", accumulation);
        assert_ne!(report.best_move, mate, "{:?}", accumulation);
        assert!(report.best_score() > 10_000, "{:?}", accumulation);
    }
}

#[test]
fn prefers_hanging_queen_over_risky_push() {
    let mut board = Board::from_fen(HANGING_QUEEN).unwrap();
    let capture = board.parse_move("d1d5").unwrap();
    let push = board.parse_move("e3e4").unwrap();

    for seed in 0..5 {
        let mut engine = seeded(SearchConfig::default().with_max_budget(1), seed);
        let report = engine.analyze(&mut board).unwrap();
        assert_eq!(report.best_move, capture);
        assert!(report.score_of(capture).unwrap() > report.score_of(push).unwrap());
    }
}

#[test]
fn risky_push_is_penalised_at_budget_zero() {
    let mut board = Board::from_fen(HANGING_QUEEN).unwrap();
    let mut engine = seeded(SearchConfig::default(), 0);
    let push = board.parse_move("e3e4").unwrap();
    let capture = board.parse_move("d1d5").unwrap();

    // 10 pawn + 10 center - 50 risk
    assert_eq!(engine.evaluate_move(&mut board, push, true, 0).unwrap(), -30);
    // 900 queen + 10 center
    assert_eq!(engine.evaluate_move(&mut board, capture, true, 0).unwrap(), 910);
}

#[test]
fn checkmated_side_has_no_move() {
    let mut board = Board::from_fen("R5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    let before = board.snapshot();
    let mut engine = seeded(SearchConfig::default(), 1);

    assert!(matches!(engine.choose_move(&mut board), Err(SearchError::NoLegalMoves)));
    assert_eq!(board.snapshot(), before);
    assert_eq!(engine.nodes_searched, 0);
}

#[test]
fn stalemated_side_has_no_move() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let mut engine = SearchEngine::with_seed(1);

    assert!(matches!(engine.analyze(&mut board), Err(SearchError::NoLegalMoves)));
}
