//! Code solving command
//!
//! Lets the solver break a known secret and records every step.

use crate::core::{Code, Hint, MAX_ATTEMPTS};
use crate::game::{GameStatus, Round, Submission};
use crate::solver::{Solver, Strategy};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: MAX_ATTEMPTS,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub hint: Hint,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific secret using the given solver
///
/// # Errors
///
/// Returns an error if the secret is not a valid 4-digit code.
pub fn solve_code<S: Strategy>(
    config: &SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, String> {
    let secret = Code::new(&config.secret).map_err(|e| format!("Invalid secret: {e}"))?;

    let mut round = Round::new(secret);
    let mut guesses: Vec<GuessStep> = Vec::new();

    while !round.is_terminal() && guesses.len() < config.max_guesses {
        let candidates_before = solver.count_candidates(round.history());

        let Some(guess) = solver.next_guess(round.history()) else {
            break;
        };

        let Submission::Accepted { hint, status, .. } = round.submit_code(guess) else {
            break;
        };

        let candidates_after = solver.count_candidates(round.history());

        guesses.push(GuessStep {
            guess,
            hint,
            candidates_before,
            candidates_after,
        });

        if status == GameStatus::Won {
            break;
        }
    }

    Ok(SolveResult {
        success: round.is_won(),
        guesses,
        secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstStrategy, MinimaxStrategy};

    #[test]
    fn solve_code_succeeds() {
        let solver = Solver::new(FirstStrategy);
        let config = SolveConfig::new("1234".to_string());

        let result = solve_code(&config, &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.secret, Code::new("1234").unwrap());
        let last = result.guesses.last().unwrap();
        assert_eq!(last.guess, result.secret);
        assert!(last.hint.is_perfect());
    }

    #[test]
    fn solve_records_history() {
        let solver = Solver::new(FirstStrategy);
        let config = SolveConfig::new("7232".to_string());

        let result = solve_code(&config, &solver).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1, "secret must stay a candidate");
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let solver = Solver::new(FirstStrategy);

        for secret in ["12a4", "123", "-123"] {
            let config = SolveConfig::new(secret.to_string());
            assert!(solve_code(&config, &solver).is_err());
        }
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let solver = Solver::new(FirstStrategy);
        let mut config = SolveConfig::new("9999".to_string());
        config.max_guesses = 3;

        let result = solve_code(&config, &solver).unwrap();

        assert_eq!(result.guesses.len(), 3);
        assert!(!result.success);
    }

    #[test]
    fn solve_with_minimax() {
        let solver = Solver::new(MinimaxStrategy);
        let config = SolveConfig::new("0042".to_string());

        let result = solve_code(&config, &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses[0].guess, MinimaxStrategy::OPENING);
        assert_eq!(result.guesses[0].candidates_before, Code::COUNT);
    }
}
