use std::ops::Range;

use engine::PieceKind;

use crate::error::{SearchError, SearchResult};
use crate::types::{DEFAULT_SEARCH_BUDGET, MAX_SEARCH_BUDGET};

/// How reply scores are folded into the score of the move they answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accumulation {
    /// Replies from both sides are added as-is.
    #[default]
    Additive,
    /// Replies are subtracted, each side scoring from its own point of view.
    Negamax,
}

impl Accumulation {
    /// `None` on i32 overflow.
    pub fn combine(self, total: i32, reply: i32) -> Option<i32> {
        match self {
            Accumulation::Additive => total.checked_add(reply),
            Accumulation::Negamax => total.checked_sub(reply),
        }
    }
}

/// A piece kind the bot is out to capture; its capture value is multiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevengeTarget {
    pub kind: PieceKind,
    pub multiplier: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Recursion depth in ply below each root move.
    pub max_budget: u32,
    /// Half-open range of root-level noise; an empty range disables it.
    pub jitter: Range<i32>,
    pub accumulation: Accumulation,
    pub revenge_target: Option<RevengeTarget>,
    /// Compare position snapshots around every branch.
    pub verify_reverts: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_budget: DEFAULT_SEARCH_BUDGET,
            jitter: -20..20,
            accumulation: Accumulation::Additive,
            revenge_target: None,
            verify_reverts: true,
        }
    }
}

impl SearchConfig {
    pub fn with_max_budget(mut self, max_budget: u32) -> Self {
        self.max_budget = max_budget;
        self
    }

    pub fn with_jitter(mut self, jitter: Range<i32>) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn without_jitter(self) -> Self {
        self.with_jitter(0..0)
    }

    pub fn with_accumulation(mut self, accumulation: Accumulation) -> Self {
        self.accumulation = accumulation;
        self
    }

    pub fn with_revenge_target(mut self, kind: PieceKind, multiplier: i32) -> Self {
        self.revenge_target = Some(RevengeTarget { kind, multiplier });
        self
    }

    pub fn with_verify_reverts(mut self, verify_reverts: bool) -> Self {
        self.verify_reverts = verify_reverts;
        self
    }

    pub fn validate(&self) -> SearchResult<()> {
        if self.max_budget > MAX_SEARCH_BUDGET {
            return Err(SearchError::InvalidConfig(format!(
                "max_budget {} exceeds limit of {}",
                self.max_budget, MAX_SEARCH_BUDGET
            )));
        }

        if let Some(target) = self.revenge_target {
            if target.kind.is_empty() {
                return Err(SearchError::InvalidConfig(
                    "revenge target must be a piece".to_string(),
                ));
            }
            if target.multiplier < 1 {
                return Err(SearchError::InvalidConfig(format!(
                    "revenge multiplier must be at least 1, got {}",
                    target.multiplier
                )));
            }
        }

        Ok(())
    }
}
