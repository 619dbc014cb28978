//! Session statistics
//!
//! The session log is an append-only list of finished games. Front ends own
//! it and pass it by reference; nothing here is global.

use crate::core::MAX_ATTEMPTS;

/// Outcome of one finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub won: bool,
    pub attempts_made: usize,
}

/// Every game finished in this process, oldest first
#[derive(Debug, Default, Clone)]
pub struct SessionLog {
    games: Vec<GameSummary>,
}

/// Aggregate view over a [`SessionLog`]
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStats {
    pub games_played: usize,
    pub games_won: usize,
    /// Mean attempts over won games only; 0.0 when nothing has been won
    pub average_attempts: f64,
    /// `attempt_distribution[n]` counts games won on attempt `n` (index 0 unused)
    pub attempt_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl SessionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished game
    pub fn record(&mut self, summary: GameSummary) {
        self.games.push(summary);
    }

    #[must_use]
    pub fn games(&self) -> &[GameSummary] {
        &self.games
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Aggregate the log
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{GameSummary, SessionLog};
    ///
    /// let mut log = SessionLog::new();
    /// log.record(GameSummary { won: true, attempts_made: 4 });
    /// log.record(GameSummary { won: false, attempts_made: 10 });
    /// log.record(GameSummary { won: true, attempts_made: 6 });
    ///
    /// let stats = log.stats();
    /// assert_eq!(stats.games_played, 3);
    /// assert_eq!(stats.games_won, 2);
    /// assert!((stats.average_attempts - 5.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        let mut distribution = [0usize; MAX_ATTEMPTS + 1];
        let mut won_attempts = 0usize;
        let mut games_won = 0usize;

        for game in self.games.iter().filter(|g| g.won) {
            games_won += 1;
            won_attempts += game.attempts_made;
            if let Some(slot) = distribution.get_mut(game.attempts_made) {
                *slot += 1;
            }
        }

        SessionStats {
            games_played: self.games.len(),
            games_won,
            average_attempts: if games_won > 0 {
                won_attempts as f64 / games_won as f64
            } else {
                0.0
            },
            attempt_distribution: distribution,
        }
    }
}

impl SessionStats {
    /// Percentage of games won (0-100)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played > 0 {
            self.games_won as f64 / self.games_played as f64 * 100.0
        } else {
            0.0
        }
    }
}
