use engine::perft::*;
use engine::{move_to_algebraic, Board};

fn main() {
    println!("🎯 PERFT SUITE");
    println!("{}", "=".repeat(60));

    let mut failures = 0;

    for case in PERFT_SUITE {
        let mut board = match Board::from_fen(case.fen) {
            Ok(board) => board,
            Err(e) => {
                println!("❌ {}: {}", case.name, e);
                failures += 1;
                continue;
            }
        };

        match perft_detailed(&mut board, case.depth) {
            Ok(result) => {
                let status = if result.nodes == case.expected_nodes { "✅" } else { "❌" };
                if result.nodes != case.expected_nodes {
                    failures += 1;
                }
                println!(
                    "{} {} depth {}: {} nodes (expected {}) | captures {} | checks {} | {:.3}s ({} nps)",
                    status,
                    case.name,
                    case.depth,
                    result.nodes,
                    case.expected_nodes,
                    result.captures,
                    result.checks,
                    result.time_ms as f64 / 1000.0,
                    result.nodes_per_second()
                );
            }
            Err(e) => {
                println!("❌ {}: {}", case.name, e);
                failures += 1;
            }
        }
    }

    if let Some(depth) = std::env::args().nth(1).and_then(|arg| arg.parse().ok()) {
        let mut board = Board::new();
        println!("\n📋 Divide from the starting position at depth {}", depth);
        match perft_divide(&mut board, depth) {
            Ok(divided) => {
                for (mv, nodes) in divided {
                    println!("{}: {}", move_to_algebraic(mv), nodes);
                }
            }
            Err(e) => println!("❌ {}", e),
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
