use engine::{move_to_algebraic, ChessLogger, Move};

use crate::types::{EvaluatedMove, SearchReport};

pub trait AILoggerExtensions {
    fn log_decision_start(&mut self, ply: u32, candidate_count: usize);
    fn log_evaluated_move(&mut self, rank: usize, entry: &EvaluatedMove<Move>);
    fn log_decision(&mut self, ply: u32, report: &SearchReport<Move>, time_ms: u64);
}

impl AILoggerExtensions for ChessLogger {
    fn log_decision_start(&mut self, ply: u32, candidate_count: usize) {
        ChessLogger::log(self, &format!("🔍 Ply {} | {} candidate moves", ply, candidate_count));
    }

    fn log_evaluated_move(&mut self, rank: usize, entry: &EvaluatedMove<Move>) {
        ChessLogger::log_with_indent(
            self,
            &format!("{:2}. {} → {}", rank, move_to_algebraic(entry.mv()), entry.score()),
        );
    }

    /// Summary line always; the full ranking only with advanced logging.
    fn log_decision(&mut self, ply: u32, report: &SearchReport<Move>, time_ms: u64) {
        if ChessLogger::should_log_advanced(self) {
            self.log_decision_start(ply, report.evaluations.len());
            ChessLogger::increase_indent(self);
            for (rank, entry) in report.evaluations.iter().enumerate() {
                self.log_evaluated_move(rank + 1, entry);
            }
            ChessLogger::decrease_indent(self);
            ChessLogger::log(self, &format!("📊 Nodes searched: {}", report.nodes_searched));
        }

        ChessLogger::log_ai_move(self, report.best_move, time_ms, report.best_score());
    }
}
