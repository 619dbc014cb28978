//! Feedback hint calculation and representation
//!
//! A hint is a run of `+` characters (right digit, right position) followed
//! by a run of `-` characters (right digit, wrong position). Positions carry
//! no information, only the two counts do.

use super::{CODE_LENGTH, Code};
use std::fmt;

/// Feedback for one guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hint {
    exact: u8,
    partial: u8,
}

impl Hint {
    /// All four digits in place
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH as u8,
        partial: 0,
    };

    /// Number of distinct `(exact, partial)` buckets used by [`Hint::bucket`]
    pub const BUCKETS: usize = (CODE_LENGTH + 1) * (CODE_LENGTH + 1);

    /// Create a hint from raw counts
    ///
    /// # Panics
    /// Panics if `exact + partial > 4`
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        // Widen first so the sum cannot wrap
        assert!(
            exact as usize + partial as usize <= CODE_LENGTH,
            "Hint credits cannot exceed the code length"
        );
        Self { exact, partial }
    }

    /// Number of `+` characters
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of `-` characters
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Check if every digit is in place
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Dense index in `0..Hint::BUCKETS`, for counting partitions without hashing
    #[inline]
    #[must_use]
    pub const fn bucket(self) -> usize {
        self.exact as usize * (CODE_LENGTH + 1) + self.partial as usize
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Exact pass: every position where the digits agree earns a `+` and
    ///    consumes that position on both sides
    /// 2. Partial pass: every unconsumed guess digit, left to right, claims the
    ///    first unconsumed secret position holding the same digit and earns a `-`
    ///
    /// A secret digit is claimed at most once, so repeated guess digits only
    /// earn credit for as many copies as the secret actually has left.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Hint};
    ///
    /// let secret = Code::new("1234").unwrap();
    /// let guess = Code::new("4233").unwrap();
    /// assert_eq!(Hint::score(&secret, &guess).to_string(), "++-");
    ///
    /// let secret = Code::new("7232").unwrap();
    /// let guess = Code::new("2111").unwrap();
    /// assert_eq!(Hint::score(&secret, &guess).to_string(), "-");
    /// ```
    #[must_use]
    // Allow: Index needed to mark both sides of a match
    #[allow(clippy::needless_range_loop)]
    pub fn score(secret: &Code, guess: &Code) -> Self {
        let mut secret_used = [false; CODE_LENGTH];
        let mut guess_used = [false; CODE_LENGTH];
        let mut exact = 0u8;
        let mut partial = 0u8;

        for i in 0..CODE_LENGTH {
            if guess.digit_at(i) == secret.digit_at(i) {
                exact += 1;
                guess_used[i] = true;
                secret_used[i] = true;
            }
        }

        for i in 0..CODE_LENGTH {
            if guess_used[i] {
                continue;
            }
            let digit = guess.digit_at(i);
            if let Some(j) =
                (0..CODE_LENGTH).find(|&j| !secret_used[j] && secret.digit_at(j) == digit)
            {
                partial += 1;
                guess_used[i] = true;
                secret_used[j] = true;
            }
        }

        Self { exact, partial }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.exact {
            f.write_str("+")?;
        }
        for _ in 0..self.partial {
            f.write_str("-")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint(secret: &str, guess: &str) -> String {
        let secret = Code::new(secret).unwrap();
        let guess = Code::new(guess).unwrap();
        Hint::score(&secret, &guess).to_string()
    }

    #[test]
    fn hint_perfect_constant() {
        assert!(Hint::PERFECT.is_perfect());
        assert_eq!(Hint::PERFECT.exact(), 4);
        assert_eq!(Hint::PERFECT.partial(), 0);
        assert_eq!(Hint::PERFECT.to_string(), "++++");
    }

    #[test]
    fn hint_no_hits() {
        assert_eq!(hint("1234", "0000"), "");
        assert_eq!(hint("7777", "1234"), "");
        assert_eq!(hint("9536", "2211"), "");
    }

    #[test]
    fn hint_one_plus() {
        assert_eq!(hint("1234", "9874"), "+");
        assert_eq!(hint("0000", "8407"), "+");
        assert_eq!(hint("1155", "1223"), "+");
    }

    #[test]
    fn hint_two_pluses() {
        assert_eq!(hint("1234", "1267"), "++");
        assert_eq!(hint("0000", "4007"), "++");
        assert_eq!(hint("7272", "3472"), "++");
    }

    #[test]
    fn hint_one_minus() {
        assert_eq!(hint("1234", "7771"), "-");
        assert_eq!(hint("0010", "4507"), "-");
        assert_eq!(hint("2342", "0278"), "-");
    }

    #[test]
    fn hint_repeated_digit_credited_once() {
        // Only one 2 in the guess; the 1s match nothing
        assert_eq!(hint("7232", "2111"), "-");
        // Three 2s in the guess: one exact, one partial, the third finds none left
        assert_eq!(hint("7232", "2022"), "+-");
    }

    #[test]
    fn hint_four_minuses() {
        assert_eq!(hint("1234", "4321"), "----");
        assert_eq!(hint("0110", "1001"), "----");
        assert_eq!(hint("5831", "3518"), "----");
    }

    #[test]
    fn hint_two_pluses_two_minuses() {
        assert_eq!(hint("1234", "1243"), "++--");
        assert_eq!(hint("4815", "5814"), "++--");
        assert_eq!(hint("4815", "4185"), "++--");
    }

    #[test]
    fn hint_one_plus_one_minus() {
        assert_eq!(hint("1234", "2994"), "+-");
        assert_eq!(hint("1623", "0021"), "+-");
        assert_eq!(hint("4815", "5117"), "+-");
    }

    #[test]
    fn hint_two_pluses_one_minus() {
        assert_eq!(hint("1234", "4233"), "++-");
        assert_eq!(hint("1516", "0116"), "++-");
    }

    #[test]
    fn exact_match_claims_digit_before_partial_pass() {
        // The 3 in position 2 is exact, so the guess's leading 3 finds nothing left
        assert_eq!(hint("1234", "3030"), "+");
        assert_eq!(hint("1234", "3000"), "-");
    }

    #[test]
    fn partial_match_claims_secret_digit() {
        // Secret has one 5; only the first guess 5 earns a minus
        assert_eq!(hint("5000", "0555"), "--");
    }

    #[test]
    fn bucket_is_dense_and_unique() {
        let mut seen = [false; Hint::BUCKETS];
        for exact in 0..=4u8 {
            for partial in 0..=(4 - exact) {
                let bucket = Hint::new(exact, partial).bucket();
                assert!(bucket < Hint::BUCKETS);
                assert!(!seen[bucket]);
                seen[bucket] = true;
            }
        }
    }

    #[test]
    #[should_panic(expected = "Hint credits cannot exceed the code length")]
    fn hint_rejects_too_many_credits() {
        let _ = Hint::new(3, 2);
    }

    #[test]
    #[should_panic(expected = "Hint credits cannot exceed the code length")]
    fn hint_rejects_credits_that_would_wrap() {
        let _ = Hint::new(200, 100);
    }

    #[test]
    fn hint_accepts_full_credit() {
        assert!(Hint::new(4, 0).is_perfect());
        assert_eq!(Hint::new(0, 4).to_string(), "----");
    }

    #[test]
    fn hint_default_is_empty() {
        assert_eq!(Hint::default().to_string(), "");
        assert!(!Hint::default().is_perfect());
    }
}
