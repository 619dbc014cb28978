//! Display functions for command results

use super::formatters::{create_progress_bar, hint_label, hint_to_pegs};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::MAX_ATTEMPTS;
use crate::game::SessionStats;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {} {}",
            turn,
            step.guess,
            hint_to_pegs(step.hint),
            hint_label(step.hint)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({:.1}x reduction)",
                    reduction.log2(),
                    reduction
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Cracked in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to crack in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Write the result of a benchmark
///
/// Best and worst counts cover won games only; lost games are reported
/// on their own line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_benchmark_result<W: Write>(out: &mut W, result: &BenchmarkResult) -> io::Result<()> {
    let stats = &result.stats;
    let games_lost = stats.games_played - stats.games_won;

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "BENCHMARK RESULTS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(out, "\n📊 {}", "Performance:".bright_cyan().bold())?;
    writeln!(out, "   Games played:     {}", stats.games_played)?;
    writeln!(
        out,
        "   Games won:        {} ({:.1}%)",
        stats.games_won,
        stats.win_rate()
    )?;
    let lost = format!("{games_lost}");
    writeln!(
        out,
        "   Games lost:       {}",
        if games_lost > 0 { lost.red() } else { lost.normal() }
    )?;
    writeln!(
        out,
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_attempts)
            .bright_yellow()
            .bold()
    )?;
    if stats.games_won > 0 {
        writeln!(
            out,
            "   Best win:         {}",
            format!("{}", result.min_attempts).green()
        )?;
        writeln!(
            out,
            "   Worst win:        {}",
            format!("{}", result.max_attempts).yellow()
        )?;
    }
    writeln!(out, "   Time taken:       {:.2}s", result.duration.as_secs_f64())?;
    writeln!(out, "   Games/second:     {:.1}", result.games_per_second)?;

    writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
    write_distribution(out, stats, games_lost)
}

fn write_distribution<W: Write>(
    out: &mut W,
    stats: &SessionStats,
    games_lost: usize,
) -> io::Result<()> {
    let row = |out: &mut W, label: &str, count: usize| {
        let pct = (count as f64 / stats.games_played as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        writeln!(out, "   {label:>4}: {} {count:5} ({pct:5.1}%)", bar.green())
    };

    for attempts in 1..=MAX_ATTEMPTS {
        let count = stats.attempt_distribution[attempts];
        if count > 0 {
            row(out, &attempts.to_string(), count)?;
        }
    }
    if games_lost > 0 {
        row(out, "lost", games_lost)?;
    }
    Ok(())
}

/// Write the session summary shown between games
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_session_stats<W: Write>(out: &mut W, stats: &SessionStats) -> io::Result<()> {
    writeln!(out, "  {}", "Session".bright_cyan().bold())?;
    writeln!(out, "    Games played:   {}", stats.games_played)?;
    writeln!(
        out,
        "    Games won:      {} ({:.0}%)",
        stats.games_won,
        stats.win_rate()
    )?;
    if stats.games_won > 0 {
        writeln!(
            out,
            "    Average guesses on wins: {:.2}",
            stats.average_attempts
        )?;
    }
    Ok(())
}
