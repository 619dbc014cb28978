//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Code;
use tracing::debug;

/// A strategy for picking the next guess from the remaining candidates
///
/// `Sync` so a single strategy can drive many games on the rayon pool.
pub trait Strategy: Sync {
    /// Select the next guess given the codes still consistent with every hint
    ///
    /// Returns `None` if there are no candidates.
    fn select_guess(&self, candidates: &[Code]) -> Option<Code>;

    /// Fixed first guess, if the strategy has one
    fn opening(&self) -> Option<Code> {
        None
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Lowest consistent code (default, fast)
    First(FirstStrategy),
    /// Worst-case minimisation over the whole code space
    Minimax(MinimaxStrategy),
    /// Random consistent code
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, candidates: &[Code]) -> Option<Code> {
        match self {
            Self::First(s) => s.select_guess(candidates),
            Self::Minimax(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }

    fn opening(&self) -> Option<Code> {
        match self {
            Self::First(s) => s.opening(),
            Self::Minimax(s) => s.opening(),
            Self::Random(s) => s.opening(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "first", "minimax", "knuth", "random"
    /// Defaults to first if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "minimax" | "knuth" => Self::Minimax(MinimaxStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::First(FirstStrategy),
        }
    }

    /// Canonical name, as accepted by [`StrategyType::from_name`]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::First(_) => "first",
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

/// Always guesses the lowest code that is still consistent
///
/// Cheap, but greedy: some secrets (0098 among them) take more than ten
/// guesses and are lost.
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_guess(&self, candidates: &[Code]) -> Option<Code> {
        candidates.iter().min().copied()
    }
}

/// Minimises the worst-case number of remaining candidates
///
/// Opens with a fixed guess; scoring the full code space against all 10,000
/// candidates on the first turn is too slow to be worth it.
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    pub const OPENING: Code = Code::from_digits([0, 1, 2, 3]);
}

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, candidates: &[Code]) -> Option<Code> {
        let (best, worst) = super::minimax::select_best_guess(candidates)?;
        debug!(%best, worst, candidates = candidates.len(), "Minimax guess selected");
        Some(best)
    }

    fn opening(&self) -> Option<Code> {
        Some(Self::OPENING)
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(&self, candidates: &[Code]) -> Option<Code> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng()).copied()
    }
}
