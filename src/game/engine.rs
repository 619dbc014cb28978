//! Round engine with replay
//!
//! Owns the secret source and the current round. Replaying throws the round
//! away and starts a new one with a fresh secret.

use super::round::{Round, Submission};
use super::secret::SecretSource;
use super::stats::GameSummary;
use tracing::info;

/// Drives consecutive games from one secret source
pub struct Engine<S: SecretSource> {
    source: S,
    round: Round,
    games_started: usize,
}

impl<S: SecretSource> Engine<S> {
    /// Create an engine and start the first game
    #[must_use]
    pub fn new(mut source: S) -> Self {
        let round = Round::new(source.generate());
        Self {
            source,
            round,
            games_started: 1,
        }
    }

    /// Submit raw player input to the current round
    pub fn submit(&mut self, input: &str) -> Submission {
        self.round.submit(input)
    }

    /// Start a new game: fresh secret, no attempts, no prior guesses
    pub fn new_game(&mut self) {
        self.round = Round::new(self.source.generate());
        self.games_started += 1;
        info!(game = self.games_started, "Replaying with a fresh secret");
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Outcome of the current game, once it is over
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.round.summary()
    }

    /// Games started by this engine, including the current one
    #[must_use]
    pub const fn games_started(&self) -> usize {
        self.games_started
    }
}
