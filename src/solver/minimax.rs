//! Worst-case partition calculation
//!
//! For a guess and a set of candidates, counts how many candidates would
//! remain after the least informative hint the guess could receive.

use crate::core::{Code, Hint};
use rayon::prelude::*;

/// Calculate the maximum remaining candidates for a guess
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::solver::minimax::calculate_max_remaining;
///
/// let candidates = vec![Code::new("1234").unwrap(), Code::new("5678").unwrap()];
///
/// // 1234 tells the two apart, 9999 does not
/// assert_eq!(calculate_max_remaining(&Code::new("1234").unwrap(), &candidates), 1);
/// assert_eq!(calculate_max_remaining(&Code::new("9999").unwrap(), &candidates), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    let mut counts = [0usize; Hint::BUCKETS];

    for candidate in candidates {
        counts[Hint::score(candidate, guess).bucket()] += 1;
    }

    counts.into_iter().max().unwrap_or(0)
}

/// Select the guess whose worst case leaves the fewest candidates
///
/// Every code is considered, not only the candidates. Ties go to a code that
/// could still be the secret, then to the lowest code. Returns the guess and
/// its worst-case count, or `None` if there are no candidates.
#[must_use]
pub fn select_best_guess(candidates: &[Code]) -> Option<(Code, usize)> {
    if candidates.is_empty() {
        return None;
    }

    let mut is_candidate = vec![false; Code::COUNT];
    for candidate in candidates {
        is_candidate[usize::from(candidate.index())] = true;
    }

    (0..Code::COUNT as u16)
        .into_par_iter()
        .map(|index| {
            let guess = Code::from_index(index);
            let worst = calculate_max_remaining(&guess, candidates);
            (worst, !is_candidate[usize::from(index)], index)
        })
        .min()
        .map(|(worst, _, index)| (Code::from_index(index), worst))
}
