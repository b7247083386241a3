use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};
use crate::evaluation::{heuristic_score, MoveFeatures};
use crate::game::{AppliedMove, GameEngine};
use crate::types::*;

pub struct SearchEngine<R = StdRng> {
    pub nodes_searched: u64,
    config: SearchConfig,
    rng: R,
    advanced_logging_enabled: bool,
    log_callback: Option<Box<dyn FnMut(&str)>>,
}

impl SearchEngine<StdRng> {
    pub fn new() -> Self {
        Self::build(SearchConfig::default(), StdRng::from_entropy())
    }

    /// Default config with a reproducible jitter sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(SearchConfig::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SearchEngine<R> {
    pub fn with_config(config: SearchConfig, rng: R) -> SearchResult<Self> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: SearchConfig, rng: R) -> Self {
        Self {
            nodes_searched: 0,
            config,
            rng,
            advanced_logging_enabled: false,
            log_callback: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_advanced_logging<F>(&mut self, enabled: bool, callback: Option<F>)
    where
        F: FnMut(&str) + 'static,
    {
        self.advanced_logging_enabled = enabled;
        self.log_callback = callback.map(|f| Box::new(f) as Box<dyn FnMut(&str)>);
    }

    /// Pick the highest scoring legal move.
    pub fn choose_move<G: GameEngine>(&mut self, position: &mut G) -> SearchResult<G::Move> {
        self.analyze(position).map(|report| report.best_move)
    }

    /// Score every legal move at the full budget, best first.
    ///
    /// Equal scores keep the order the game engine generated the moves in.
    pub fn analyze<G: GameEngine>(&mut self, position: &mut G) -> SearchResult<SearchReport<G::Move>> {
        self.nodes_searched = 0;

        let moves = position.legal_moves();
        if moves.is_empty() {
            log::debug!("no legal moves at ply {}", position.ply_count());
            return Err(SearchError::NoLegalMoves);
        }

        let white = position.white_to_move();
        let budget = self.config.max_budget;

        let mut evaluations = Vec::with_capacity(moves.len());
        for mv in moves {
            let score = self.evaluate_move(position, mv, white, budget)?;
            evaluations.push(EvaluatedMove::new(mv, score));
        }

        // stable: ties stay in generation order
        evaluations.sort_by(|a, b| b.score().cmp(&a.score()));

        self.log_evaluations(position.ply_count(), &evaluations);

        let best_move = evaluations
            .first()
            .map(EvaluatedMove::mv)
            .ok_or(SearchError::NoLegalMoves)?;

        log::debug!(
            "chose {} out of {} moves, {} nodes",
            best_move,
            evaluations.len(),
            self.nodes_searched
        );

        Ok(SearchReport {
            best_move,
            evaluations,
            nodes_searched: self.nodes_searched,
        })
    }

    /// Heuristic score of `mv` plus the scores of all replies down to `budget` 0.
    ///
    /// The position is mutated while the call runs and is back in its original
    /// state when it returns, whether or not the result is `Ok`.
    /// `budget` may not exceed the configured `max_budget`.
    pub fn evaluate_move<G: GameEngine>(
        &mut self,
        position: &mut G,
        mv: G::Move,
        white: bool,
        budget: u32,
    ) -> SearchResult<i32> {
        if budget > self.config.max_budget {
            return Err(SearchError::BudgetExceeded {
                budget,
                max: self.config.max_budget,
            });
        }

        self.nodes_searched += 1;

        let before = self.config.verify_reverts.then(|| position.snapshot());
        let features = MoveFeatures::gather(position, mv);

        let mut score = {
            let mut applied = AppliedMove::apply(position, mv).map_err(SearchError::collaborator)?;
            let score = self.score_applied(&mut *applied, &features, white, budget)?;
            applied.revert().map_err(SearchError::collaborator)?;
            score
        };

        if let Some(before) = before {
            if position.snapshot() != before {
                log::error!("position changed after searching {}: {:?}", mv, before);
                return Err(SearchError::InconsistentRevert { mv: mv.to_string() });
            }
        }

        if budget == self.config.max_budget {
            score = score
                .checked_add(self.jitter())
                .ok_or(SearchError::ScoreOverflow)?;
        }

        log::trace!(
            "{} {} budget {} -> {}",
            if white { "white" } else { "black" },
            mv,
            budget,
            score
        );

        Ok(score)
    }

    fn score_applied<G: GameEngine>(
        &mut self,
        position: &mut G,
        features: &MoveFeatures,
        white: bool,
        budget: u32,
    ) -> SearchResult<i32> {
        let mut score = heuristic_score(features, position.is_checkmate(), &self.config)?;

        if budget > 0 {
            for reply in position.legal_moves() {
                let reply_score = self.evaluate_move(position, reply, !white, budget - 1)?;
                score = self
                    .config
                    .accumulation
                    .combine(score, reply_score)
                    .ok_or(SearchError::ScoreOverflow)?;
            }
        }

        Ok(score)
    }

    fn jitter(&mut self) -> i32 {
        if self.config.jitter.is_empty() {
            0
        } else {
            self.rng.gen_range(self.config.jitter.clone())
        }
    }

    fn log_evaluations<M: Copy + std::fmt::Display>(&mut self, ply: u32, evaluations: &[EvaluatedMove<M>]) {
        if !self.advanced_logging_enabled {
            return;
        }

        self.log(&format!("Ply: {}", ply));
        self.log("Evaluations: {");
        for (idx, entry) in evaluations.iter().enumerate() {
            self.log(&format!("{} - {}", idx, entry));
        }
        self.log("}");
    }

    fn log(&mut self, message: &str) {
        if let Some(ref mut callback) = self.log_callback {
            callback(message);
        }
    }
}

impl Default for SearchEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}
