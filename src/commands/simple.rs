//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. All terminal I/O for the console lives
//! here; the engine only ever sees the text of each line.

use crate::core::{CODE_LENGTH, Code, Hint, MAX_ATTEMPTS, MAX_DIGIT};
use crate::game::{Engine, GameStatus, Rejection, SecretSource, SessionLog, Submission};
use crate::output::display::write_session_stats;
use crate::output::formatters::{Urgency, hint_label, hint_to_pegs, urgency};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

const MARGIN: &str = "  ";

/// Run the simple interactive CLI mode
///
/// Plays games until the player declines a replay or input runs out. Every
/// finished game is appended to `log`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S, R, W>(
    engine: &mut Engine<S>,
    log: &mut SessionLog,
    input: &mut R,
    out: &mut W,
    reveal: bool,
) -> io::Result<()>
where
    S: SecretSource,
    R: BufRead,
    W: Write,
{
    print_rules(out)?;

    loop {
        if reveal {
            caution(out, &format!("Answer: {}", engine.round().peek_secret()))?;
        }

        if !play_round(engine, input, out)? {
            writeln!(out, "\n{MARGIN}Thanks for playing!\n")?;
            return Ok(());
        }

        if let Some(summary) = engine.summary() {
            log.record(summary);
        }
        writeln!(out)?;
        write_session_stats(out, &log.stats())?;
        writeln!(out)?;

        let answer = prompt(out, input, "Play again? (yes/no)")?;
        match answer.as_deref().map(str::to_lowercase).as_deref() {
            Some("yes" | "y") => {
                engine.new_game();
                writeln!(out, "\n{MARGIN}New game started!\n")?;
            }
            _ => {
                writeln!(out, "\n{MARGIN}Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

/// Play the current round to the end
///
/// Returns `false` if input ran out before the round finished.
fn play_round<S, R, W>(engine: &mut Engine<S>, input: &mut R, out: &mut W) -> io::Result<bool>
where
    S: SecretSource,
    R: BufRead,
    W: Write,
{
    while !engine.round().is_terminal() {
        print_remaining(out, engine.round().attempts_remaining())?;

        loop {
            let Some(line) = prompt(out, input, "Guess")? else {
                debug!("Input closed mid-round");
                return Ok(false);
            };

            match engine.submit(&line) {
                Submission::Rejected(Rejection::InvalidFormat) => warning(
                    out,
                    &format!(
                        "Please enter a valid guess in the form of {CODE_LENGTH} digits (i.e. 4815)"
                    ),
                )?,
                Submission::Rejected(Rejection::DuplicateGuess) => warning(
                    out,
                    &format!("You already tried {}. Guesses don't repeat.", line.trim()),
                )?,
                Submission::Rejected(Rejection::GameOver) => return Ok(true),
                Submission::Accepted { hint, status, .. } => {
                    match status {
                        GameStatus::Won => attention(
                            out,
                            &format!(
                                "You Win!!! Congratulations!! Cracked in {} {}",
                                engine.round().attempts_made(),
                                if engine.round().attempts_made() == 1 {
                                    "attempt"
                                } else {
                                    "attempts"
                                }
                            ),
                        )?,
                        GameStatus::InProgress | GameStatus::Lost => writeln!(
                            out,
                            "{MARGIN}Hint: {}  {}",
                            hint_label(hint).bold(),
                            hint_to_pegs(hint)
                        )?,
                    }
                    if let Some(secret) = engine.round().revealed_secret()
                        && status == GameStatus::Lost
                    {
                        warning(out, &format!("Sorry you lost. The answer is {secret}"))?;
                    }
                    break;
                }
            }
        }
    }

    Ok(true)
}

fn print_rules<W: Write>(out: &mut W) -> io::Result<()> {
    let example_secret = Code::from_digits([1, 2, 3, 4]);
    let example_guess = Code::from_digits([4, 2, 3, 3]);
    let repeat_secret = Code::from_digits([7, 2, 3, 2]);
    let repeat_guess = Code::from_digits([2, 1, 1, 1]);

    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "                 M A S T E R M I N D".bright_green().bold()
    )?;
    writeln!(out, "{}\n", "═".repeat(62).bright_cyan())?;

    writeln!(
        out,
        "{MARGIN}{CODE_LENGTH} digits (0-{MAX_DIGIT}) have been picked at random. You have \
         {MAX_ATTEMPTS} chances\n{MARGIN}to guess all of them in the right order.\n"
    )?;
    writeln!(out, "{MARGIN}After each guess you get a hint:")?;
    writeln!(
        out,
        "{MARGIN}{MARGIN}(+) for every digit that is correct and in the correct position"
    )?;
    writeln!(
        out,
        "{MARGIN}{MARGIN}(-) for every digit that is correct but in the wrong position\n"
    )?;
    writeln!(
        out,
        "{MARGIN}Plus signs come first, so the first (+) is not necessarily the first digit.\n"
    )?;
    writeln!(
        out,
        "{MARGIN}Example: secret {example_secret}, guess {example_guess} -> hint {}",
        Hint::score(&example_secret, &example_guess)
    )?;
    writeln!(
        out,
        "{MARGIN}A repeated secret digit is credited once per copy: secret {repeat_secret}, \
         guess {repeat_guess} -> hint {}\n",
        Hint::score(&repeat_secret, &repeat_guess)
    )?;

    Ok(())
}

fn print_remaining<W: Write>(out: &mut W, remaining: usize) -> io::Result<()> {
    let text = format!("Guesses Remaining: {remaining}");
    match urgency(remaining) {
        Urgency::Normal => writeln!(out, "{MARGIN}{text}"),
        Urgency::Caution => caution(out, &text),
        Urgency::Warning => warning(out, &text),
    }
}

// Symbols alongside colour so meaning survives without colour vision

fn warning<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{MARGIN}{}", format!("(!!!) {text}").red())
}

fn caution<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{MARGIN}{}", format!("(!) {text}").yellow())
}

fn attention<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{MARGIN}{}", format!("(*) {text}").green().bold())
}

/// Prompt and read one line; `None` once input is exhausted
fn prompt<R: BufRead, W: Write>(
    out: &mut W,
    input: &mut R,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{MARGIN}{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FixedSecret, GameSummary};
    use std::io::Cursor;

    fn play(secrets: &[&str], script: &str, reveal: bool) -> (SessionLog, String) {
        let codes = secrets.iter().map(|s| Code::new(s).unwrap()).collect();
        let mut engine = Engine::new(FixedSecret::cycle(codes).unwrap());
        let mut log = SessionLog::new();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();

        run_simple(&mut engine, &mut log, &mut input, &mut out, reveal).unwrap();

        (log, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_then_decline_replay() {
        let (log, out) = play(&["1234"], "4233\n1234\nno\n", false);

        assert_eq!(
            log.games(),
            &[GameSummary {
                won: true,
                attempts_made: 2
            }]
        );
        assert!(out.contains("++-"));
        assert!(out.contains("You Win!!!"));
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn invalid_and_duplicate_guesses_reprompt() {
        let (log, out) = play(&["1234"], "12a4\n1111\n1111\n\n1234\nn\n", false);

        assert_eq!(log.games()[0].attempts_made, 2);
        assert!(out.contains("Please enter a valid guess"));
        assert!(out.contains("You already tried 1111"));
    }

    #[test]
    fn loss_reveals_secret() {
        let script = "1111\n2222\n3333\n4444\n5555\n6666\n7777\n8888\n9999\n1000\nno\n";
        let (log, out) = play(&["0000"], script, false);

        assert_eq!(
            log.games(),
            &[GameSummary {
                won: false,
                attempts_made: 10
            }]
        );
        assert!(out.contains("Sorry you lost. The answer is 0000"));
    }

    #[test]
    fn replay_starts_fresh_game() {
        let (log, _) = play(&["1234", "5678"], "1234\nyes\n1234\n5678\nno\n", false);

        assert_eq!(
            log.games(),
            &[
                GameSummary {
                    won: true,
                    attempts_made: 1
                },
                GameSummary {
                    won: true,
                    attempts_made: 2
                },
            ]
        );
    }

    #[test]
    fn eof_mid_round_exits_cleanly_without_recording() {
        let (log, out) = play(&["1234"], "5678\n", false);

        assert!(log.is_empty());
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn reveal_shows_secret_up_front() {
        let (_, out) = play(&["8675"], "8675\nno\n", true);
        assert!(out.contains("Answer: 8675"));
    }

    #[test]
    fn remaining_counter_escalates() {
        let script = "1111\n2222\n3333\n4444\n5555\n6666\n7777\n8888\n9999\n1000\nno\n";
        let (_, out) = play(&["0000"], script, false);

        assert!(out.contains("Guesses Remaining: 10"));
        assert!(out.contains("(!) Guesses Remaining: 5"));
        assert!(out.contains("(!!!) Guesses Remaining: 1"));
    }

    #[test]
    fn rules_use_real_scores() {
        let (_, out) = play(&["1234"], "", false);
        assert!(out.contains("guess 4233 -> hint ++-"));
        assert!(out.contains("guess 2111 -> hint -"));
    }
}
