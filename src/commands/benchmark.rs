//! Benchmark command
//!
//! Lets the solver play many random games and aggregates the outcomes.

use crate::core::Code;
use crate::game::{RandomSecret, SecretSource, SessionLog, SessionStats};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub games: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub stats: SessionStats,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `config.games` games against seeded random secrets
///
/// Secrets are drawn up front from one seeded source, so the same seed
/// always benchmarks the same secrets regardless of thread scheduling.
pub fn run_benchmark<S: Strategy>(solver: &Solver<S>, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut source = RandomSecret::seeded(config.seed);
    let secrets: Vec<Code> = (0..config.games).map(|_| source.generate()).collect();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let summaries: Vec<_> = secrets
        .par_iter()
        .filter_map(|&secret| {
            let round = solver.play(secret);
            pb.inc(1);
            round.summary()
        })
        .collect();

    pb.finish_with_message("done");
    let duration = start.elapsed();

    let mut log = SessionLog::new();
    for summary in &summaries {
        log.record(*summary);
    }

    let won_attempts = || log.games().iter().filter(|g| g.won).map(|g| g.attempts_made);
    let stats = log.stats();
    info!(
        games = stats.games_played,
        won = stats.games_won,
        average = stats.average_attempts,
        "Benchmark finished"
    );

    BenchmarkResult {
        min_attempts: won_attempts().min().unwrap_or(0),
        max_attempts: won_attempts().max().unwrap_or(0),
        games_per_second: if duration.as_secs_f64() > 0.0 {
            stats.games_played as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
        stats,
        duration,
    }
}
