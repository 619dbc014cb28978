//! Round state machine
//!
//! One `Round` is one game: a fixed secret, up to ten accepted guesses, and a
//! status that moves from `InProgress` to `Won` or `Lost` exactly once.

use super::stats::GameSummary;
use crate::core::{Code, Hint, MAX_ATTEMPTS};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::{debug, info};

/// Game-level state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or lost
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a submitted guess did not count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidFormat,
    DuplicateGuess,
    GameOver,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid format"),
            Self::DuplicateGuess => write!(f, "duplicate guess"),
            Self::GameOver => write!(f, "game is over"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Outcome of submitting one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Nothing changed; the player should be prompted again
    Rejected(Rejection),
    /// The guess consumed an attempt
    Accepted {
        guess: Code,
        hint: Hint,
        status: GameStatus,
    },
}

impl Submission {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Hint for an accepted guess
    #[must_use]
    pub const fn hint(&self) -> Option<Hint> {
        match self {
            Self::Accepted { hint, .. } => Some(*hint),
            Self::Rejected(_) => None,
        }
    }

    /// Reason for a rejected guess
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            Self::Accepted { .. } => None,
        }
    }
}

/// A single game in progress or finished
#[derive(Debug, Clone)]
pub struct Round {
    secret: Code,
    status: GameStatus,
    history: Vec<(Code, Hint)>,
    prior_guesses: FxHashSet<Code>,
}

impl Round {
    #[must_use]
    pub fn new(secret: Code) -> Self {
        info!("New round started");
        Self {
            secret,
            status: GameStatus::InProgress,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            prior_guesses: FxHashSet::default(),
        }
    }

    /// Submit raw player input
    ///
    /// Invalid or repeated guesses are rejected without using an attempt.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    /// use mastermind::game::{GameStatus, Rejection, Round, Submission};
    ///
    /// let mut round = Round::new(Code::new("1234").unwrap());
    ///
    /// let first = round.submit("4233");
    /// assert_eq!(first.hint().unwrap().to_string(), "++-");
    ///
    /// assert_eq!(round.submit("42"), Submission::Rejected(Rejection::InvalidFormat));
    /// assert_eq!(round.submit("4233"), Submission::Rejected(Rejection::DuplicateGuess));
    /// assert_eq!(round.attempts_made(), 1);
    ///
    /// round.submit("1234");
    /// assert_eq!(round.status(), GameStatus::Won);
    /// ```
    pub fn submit(&mut self, input: &str) -> Submission {
        if self.status.is_terminal() {
            return Self::reject(Rejection::GameOver, input);
        }

        match Code::new(input) {
            Ok(guess) => self.submit_code(guess),
            Err(err) => {
                debug!(error = %err, "Guess failed format validation");
                Self::reject(Rejection::InvalidFormat, input)
            }
        }
    }

    /// Submit an already parsed guess
    pub fn submit_code(&mut self, guess: Code) -> Submission {
        if self.status.is_terminal() {
            return Submission::Rejected(Rejection::GameOver);
        }

        if !self.prior_guesses.insert(guess) {
            debug!(%guess, "Duplicate guess rejected");
            return Submission::Rejected(Rejection::DuplicateGuess);
        }

        let hint = Hint::score(&self.secret, &guess);
        self.history.push((guess, hint));

        if guess == self.secret {
            self.status = GameStatus::Won;
        } else if self.history.len() == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        debug!(
            %guess,
            %hint,
            attempt = self.history.len(),
            status = ?self.status,
            "Guess accepted"
        );
        if self.status.is_terminal() {
            info!(
                won = self.is_won(),
                attempts = self.attempts_made(),
                "Round finished"
            );
        }

        Submission::Accepted {
            guess,
            hint,
            status: self.status,
        }
    }

    /// Pure form of [`Round::submit`]: consume the state, return the next one
    #[must_use]
    pub fn apply(mut self, input: &str) -> (Self, Submission) {
        let submission = self.submit(input);
        (self, submission)
    }

    fn reject(reason: Rejection, input: &str) -> Submission {
        debug!(input = input.trim(), %reason, "Guess rejected");
        Submission::Rejected(reason)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }

    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Accepted guesses so far (0-10)
    #[inline]
    #[must_use]
    pub fn attempts_made(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// Accepted guesses with their hints, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Code, Hint)] {
        &self.history
    }

    /// Check whether `guess` was already accepted this game
    #[must_use]
    pub fn has_guessed(&self, guess: &Code) -> bool {
        self.prior_guesses.contains(guess)
    }

    /// The secret, once the game is over
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<Code> {
        if self.status.is_terminal() {
            Some(self.secret)
        } else {
            None
        }
    }

    /// The secret regardless of state, for QA display
    #[must_use]
    pub const fn peek_secret(&self) -> Code {
        self.secret
    }

    /// Outcome for the session log, once the game is over
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.status.is_terminal().then(|| GameSummary {
            won: self.is_won(),
            attempts_made: self.attempts_made(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(secret: &str) -> Round {
        Round::new(Code::new(secret).unwrap())
    }

    #[test]
    fn new_round_is_in_progress() {
        let round = round("1234");
        assert_eq!(round.status(), GameStatus::InProgress);
        assert_eq!(round.attempts_made(), 0);
        assert_eq!(round.attempts_remaining(), MAX_ATTEMPTS);
        assert!(round.history().is_empty());
        assert_eq!(round.revealed_secret(), None);
        assert_eq!(round.summary(), None);
    }

    #[test]
    fn hint_then_win_on_exact_guess() {
        let mut round = round("1234");

        let first = round.submit("4233");
        assert!(first.is_accepted());
        assert_eq!(first.hint().map(|h| h.to_string()).as_deref(), Some("++-"));
        assert_eq!(round.status(), GameStatus::InProgress);

        let second = round.submit("1234");
        assert_eq!(
            second,
            Submission::Accepted {
                guess: Code::new("1234").unwrap(),
                hint: Hint::PERFECT,
                status: GameStatus::Won,
            }
        );
        assert_eq!(round.attempts_made(), 2);
        assert!(round.is_won());
    }

    #[test]
    fn win_on_first_attempt() {
        let mut round = round("1234");

        round.submit("1234");

        assert_eq!(round.status(), GameStatus::Won);
        assert_eq!(
            round.summary(),
            Some(GameSummary {
                won: true,
                attempts_made: 1
            })
        );
    }

    #[test]
    fn ten_misses_lose_and_reveal_secret() {
        let mut round = round("0000");

        for guess in [
            "1111", "2222", "3333", "4444", "5555", "6666", "7777", "8888", "9999", "1000",
        ] {
            let submission = round.submit(guess);
            assert!(submission.is_accepted(), "guess {guess} was rejected");
        }

        assert_eq!(round.status(), GameStatus::Lost);
        assert_eq!(round.attempts_made(), 10);
        assert_eq!(round.attempts_remaining(), 0);
        assert_eq!(round.revealed_secret(), Some(Code::new("0000").unwrap()));
        assert_eq!(
            round.summary(),
            Some(GameSummary {
                won: false,
                attempts_made: 10
            })
        );
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let mut round = round("5555");

        for guess in [
            "0000", "1111", "2222", "3333", "4444", "6666", "7777", "8888", "9999",
        ] {
            round.submit(guess);
        }
        assert_eq!(round.attempts_made(), 9);

        round.submit("5555");
        assert_eq!(round.status(), GameStatus::Won);
        assert_eq!(round.attempts_made(), 10);
    }

    #[test]
    fn duplicate_guess_does_not_use_attempt() {
        let mut round = round("1234");

        assert!(round.submit("1111").is_accepted());
        let attempts = round.attempts_made();

        let again = round.submit("1111");
        assert_eq!(again, Submission::Rejected(Rejection::DuplicateGuess));
        assert_eq!(again.rejection().map(|r| r.to_string()).as_deref(), Some("duplicate guess"));
        assert_eq!(round.attempts_made(), attempts);
    }

    #[test]
    fn duplicate_detected_after_trimming() {
        let mut round = round("1234");

        round.submit("0042");
        assert_eq!(
            round.submit("  0042 "),
            Submission::Rejected(Rejection::DuplicateGuess)
        );
    }

    #[test]
    fn invalid_format_does_not_use_attempt() {
        let mut round = round("1234");

        for input in ["", "123", "12345", "123a", "-123", "mastermind"] {
            let submission = round.submit(input);
            assert_eq!(submission, Submission::Rejected(Rejection::InvalidFormat));
            assert_eq!(submission.hint(), None);
        }

        assert_eq!(round.attempts_made(), 0);
        assert!(round.history().is_empty());
    }

    #[test]
    fn invalid_guess_is_not_remembered() {
        let mut round = round("1234");

        round.submit("12a4");
        assert!(round.submit("1204").is_accepted());
        assert!(!round.has_guessed(&Code::new("1200").unwrap()));
        assert!(round.has_guessed(&Code::new("1204").unwrap()));
    }

    #[test]
    fn terminal_round_rejects_further_guesses() {
        let mut round = round("1234");
        round.submit("1234");

        assert_eq!(round.submit("5678"), Submission::Rejected(Rejection::GameOver));
        assert_eq!(
            round.submit_code(Code::new("5678").unwrap()),
            Submission::Rejected(Rejection::GameOver)
        );
        assert_eq!(round.attempts_made(), 1);
    }

    #[test]
    fn apply_threads_state_through() {
        let state = round("1234");

        let (state, first) = state.apply("4233");
        let (state, second) = state.apply("4233");
        let (state, third) = state.apply("1234");

        assert!(first.is_accepted());
        assert_eq!(second.rejection(), Some(Rejection::DuplicateGuess));
        assert!(third.is_accepted());
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.attempts_made(), 2);
    }

    #[test]
    fn history_keeps_order_and_hints() {
        let mut round = round("7232");

        round.submit("2111");
        round.submit("7000");

        let history: Vec<(String, String)> = round
            .history()
            .iter()
            .map(|(g, h)| (g.to_string(), h.to_string()))
            .collect();
        assert_eq!(
            history,
            vec![
                ("2111".to_string(), "-".to_string()),
                ("7000".to_string(), "+".to_string())
            ]
        );
    }
}
