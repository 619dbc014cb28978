//! Main code breaker interface

use super::strategy::Strategy;
use crate::core::{Code, Hint};
use crate::game::Round;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Automatic code breaker
///
/// Coordinates candidate filtering with a guess selection strategy.
pub struct Solver<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Solver<S> {
    #[must_use]
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Get the next guess given previous guesses and hints
    ///
    /// Returns `None` if no code is consistent with the history.
    pub fn next_guess(&self, history: &[(Code, Hint)]) -> Option<Code> {
        if history.is_empty()
            && let Some(opening) = self.strategy.opening()
        {
            return Some(opening);
        }

        let candidates = self.filter_candidates(history);
        trace!(remaining = candidates.len(), "Candidates filtered");

        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => self.strategy.select_guess(&candidates),
        }
    }

    /// Codes that would have produced every observed hint
    // Allow: Kept on the solver so callers do not depend on how candidates are stored
    #[allow(clippy::unused_self)]
    pub fn filter_candidates(&self, history: &[(Code, Hint)]) -> Vec<Code> {
        (0..Code::COUNT as u16)
            .into_par_iter()
            .map(Code::from_index)
            .filter(|candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| Hint::score(candidate, guess) == *observed)
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[(Code, Hint)]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Play one full game against `secret`
    ///
    /// Stops early only if the strategy runs out of guesses, which cannot
    /// happen while the secret itself is still a candidate.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    /// use mastermind::solver::{FirstStrategy, Solver};
    ///
    /// let solver = Solver::new(FirstStrategy);
    /// let round = solver.play(Code::new("0042").unwrap());
    /// assert!(round.is_terminal());
    /// ```
    pub fn play(&self, secret: Code) -> Round {
        let mut round = Round::new(secret);

        while !round.is_terminal() {
            let Some(guess) = self.next_guess(round.history()) else {
                break;
            };
            if !round.submit_code(guess).is_accepted() {
                debug!(%guess, "Strategy repeated a guess");
                break;
            }
        }

        round
    }
}
