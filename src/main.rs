//! Mastermind - CLI
//!
//! Digit code-breaking game with TUI and console modes, plus an automatic
//! solver for solving and benchmarking.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use mastermind::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_simple, solve_code},
    core::{Code, Hint},
    game::{Engine, RandomSecret, SessionLog},
    output::{
        formatters::{hint_label, hint_to_pegs},
        print_solve_result, write_benchmark_result, write_session_stats,
    },
    solver::{Solver, StrategyType},
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack a secret 4-digit code in 10 guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solver strategy: first (default), minimax, random
    #[arg(short, long, global = true, default_value = "first")]
    strategy: String,

    /// Seed for secret generation (reproducible games and benchmarks)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show the secret when each game starts (for testing)
    #[arg(long, global = true)]
    reveal: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (line-based, no TUI)
    Simple,

    /// Let the solver crack a specific secret
    Solve {
        /// The secret code to crack
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Print the hint for a single guess against a secret
    Score {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it only logs when sent to a file
    match (&command, cli.log_file.as_deref()) {
        (Commands::Play, None) => {}
        (_, log_file) => init_tracing(log_file)?,
    }

    match command {
        Commands::Play => run_play_command(cli.seed, cli.reveal),
        Commands::Simple => run_simple_command(cli.seed, cli.reveal),
        Commands::Solve { secret, verbose } => run_solve_command(&cli.strategy, &secret, verbose),
        Commands::Benchmark { count } => run_benchmark_command(&cli.strategy, count, cli.seed),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
    }
}

/// Install the global subscriber, filtered by `RUST_LOG` (default `warn`)
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init();
    }

    Ok(())
}

fn secret_source(seed: Option<u64>) -> RandomSecret {
    seed.map_or_else(RandomSecret::from_entropy, RandomSecret::seeded)
}

fn run_play_command(seed: Option<u64>, reveal: bool) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(Engine::new(secret_source(seed)), reveal);
    let log = run_tui(app)?;

    if !log.is_empty() {
        write_session_stats(&mut io::stdout(), &log.stats())?;
    }
    Ok(())
}

fn run_simple_command(seed: Option<u64>, reveal: bool) -> Result<()> {
    let mut engine = Engine::new(secret_source(seed));
    let mut log = SessionLog::new();

    run_simple(
        &mut engine,
        &mut log,
        &mut io::stdin().lock(),
        &mut io::stdout(),
        reveal,
    )
    .context("Console I/O failed")?;

    info!(games = log.games().len(), "Session ended");
    Ok(())
}

fn run_solve_command(strategy_name: &str, secret: &str, verbose: bool) -> Result<()> {
    let solver = Solver::new(StrategyType::from_name(strategy_name));
    let config = SolveConfig::new(secret.to_string());
    let result = solve_code(&config, &solver).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, count: usize, seed: Option<u64>) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let seed = seed.unwrap_or_else(rand::random);

    println!(
        "Running benchmark on {count} random secrets (strategy: {}, seed: {seed})...",
        strategy.name()
    );

    let solver = Solver::new(strategy);
    let result = run_benchmark(&solver, &BenchmarkConfig::new(count, seed));
    write_benchmark_result(&mut io::stdout(), &result)?;
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let secret = Code::new(secret).context("Invalid secret")?;
    let guess = Code::new(guess).context("Invalid guess")?;

    let hint = Hint::score(&secret, &guess);
    println!(
        "{}  {}  {}",
        guess.to_string().bright_yellow().bold(),
        hint_to_pegs(hint),
        hint_label(hint)
    );
    Ok(())
}
