//! TUI application state and logic

use crate::core::CODE_LENGTH;
use crate::game::{Engine, GameStatus, Rejection, SecretSource, SessionLog, Submission};
use crate::output::formatters::{Urgency, hint_label, urgency};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App<S: SecretSource> {
    pub engine: Engine<S>,
    pub log: SessionLog,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub reveal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl<S: SecretSource> App<S> {
    #[must_use]
    pub fn new(engine: Engine<S>, reveal: bool) -> Self {
        let mut app = Self {
            engine,
            log: SessionLog::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            reveal,
        };
        app.add_message(
            "Welcome! Crack the 4-digit code in 10 guesses.",
            MessageStyle::Info,
        );
        app.add_message(
            "+ = right digit, right place   - = right digit, wrong place",
            MessageStyle::Info,
        );
        app.announce_secret();
        app
    }

    fn announce_secret(&mut self) {
        if self.reveal {
            let secret = self.engine.round().peek_secret();
            self.add_message(&format!("(QA) Answer: {secret}"), MessageStyle::Warning);
        }
    }

    /// Append a digit to the guess being typed; anything else is ignored
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() && self.input_buffer.len() < CODE_LENGTH {
            self.input_buffer.push(c);
        }
    }

    /// Submit the typed guess to the engine
    pub fn handle_submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.engine.submit(&input) {
            Submission::Rejected(Rejection::InvalidFormat) => {
                self.add_message(
                    &format!("Enter exactly {CODE_LENGTH} digits (e.g. 4815)"),
                    MessageStyle::Error,
                );
            }
            Submission::Rejected(Rejection::DuplicateGuess) => {
                self.add_message(
                    &format!("You already tried {input}. Guesses don't repeat."),
                    MessageStyle::Error,
                );
            }
            Submission::Rejected(Rejection::GameOver) => {
                self.add_message("This game is over. Press 'n' to play again.", MessageStyle::Info);
            }
            Submission::Accepted {
                guess,
                hint,
                status,
            } => match status {
                GameStatus::InProgress => {
                    let remaining = self.engine.round().attempts_remaining();
                    let style = match urgency(remaining) {
                        Urgency::Normal => MessageStyle::Info,
                        Urgency::Caution | Urgency::Warning => MessageStyle::Warning,
                    };
                    self.add_message(
                        &format!("{guess} → {}  ({remaining} left)", hint_label(hint)),
                        style,
                    );
                }
                GameStatus::Won => {
                    let celebration = match self.engine.round().attempts_made() {
                        1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4..=6 => "👏 GREAT JOB! Code cracked! 👏",
                        7..=9 => "🎉 NICE WORK! Code cracked! 🎉",
                        _ => "😅 PHEW! Cracked on the last guess! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.finish_game();
                }
                GameStatus::Lost => {
                    if let Some(secret) = self.engine.round().revealed_secret() {
                        self.add_message(
                            &format!("Out of guesses! The answer was {secret}"),
                            MessageStyle::Error,
                        );
                    }
                    self.finish_game();
                }
            },
        }
    }

    fn finish_game(&mut self) {
        if let Some(summary) = self.engine.summary() {
            self.log.record(summary);
            debug!(?summary, "Game recorded");
        }
        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Abandon or replace the current game with a fresh one
    pub fn new_game(&mut self) {
        self.engine.new_game();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! A fresh code awaits.", MessageStyle::Info);
        self.announce_secret();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Returns the session log so the caller can report on it after the
/// terminal is restored.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SecretSource>(app: App<S>) -> Result<SessionLog> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Starting TUI");

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: SecretSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<SessionLog> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n' | 'y') | KeyCode::Enter => {
                        app.new_game();
                    }
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char(c) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.handle_submit();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use crate::game::{FixedSecret, GameSummary};

    fn app(secrets: &[&str]) -> App<FixedSecret> {
        let codes = secrets.iter().map(|s| Code::new(s).unwrap()).collect();
        App::new(Engine::new(FixedSecret::cycle(codes).unwrap()), false)
    }

    fn type_guess(app: &mut App<FixedSecret>, guess: &str) {
        for c in guess.chars() {
            app.push_char(c);
        }
        app.handle_submit();
    }

    fn last_message(app: &App<FixedSecret>) -> &Message {
        app.messages.last().unwrap()
    }

    #[test]
    fn buffer_accepts_only_four_digits() {
        let mut app = app(&["1234"]);

        for c in "12a-3456".chars() {
            app.push_char(c);
        }

        assert_eq!(app.input_buffer, "1234");
    }

    #[test]
    fn short_guess_is_rejected_without_using_attempt() {
        let mut app = app(&["1234"]);

        type_guess(&mut app, "12");

        assert_eq!(app.engine.round().attempts_made(), 0);
        assert_eq!(last_message(&app).style, MessageStyle::Error);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn hint_is_reported() {
        let mut app = app(&["1234"]);

        type_guess(&mut app, "4233");

        assert!(last_message(&app).text.contains("4233 → ++-"));
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn duplicate_guess_reported() {
        let mut app = app(&["1234"]);

        type_guess(&mut app, "1111");
        type_guess(&mut app, "1111");

        assert_eq!(app.engine.round().attempts_made(), 1);
        assert!(last_message(&app).text.contains("already tried 1111"));
    }

    #[test]
    fn win_records_game_and_waits_for_replay() {
        let mut app = app(&["1234"]);

        type_guess(&mut app, "1234");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(
            app.log.games(),
            &[GameSummary {
                won: true,
                attempts_made: 1
            }]
        );
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn loss_reveals_secret() {
        let mut app = app(&["0000"]);

        for guess in [
            "1111", "2222", "3333", "4444", "5555", "6666", "7777", "8888", "9999", "1000",
        ] {
            type_guess(&mut app, guess);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("The answer was 0000"))
        );
        assert!(!app.log.games()[0].won);
    }

    #[test]
    fn new_game_resets_state_but_keeps_log() {
        let mut app = app(&["1234", "5678"]);
        type_guess(&mut app, "1234");

        app.new_game();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.engine.round().attempts_made(), 0);
        assert_eq!(app.engine.round().peek_secret(), Code::new("5678").unwrap());
        assert_eq!(app.log.games().len(), 1);
    }

    #[test]
    fn reveal_announces_secret() {
        let engine = Engine::new(FixedSecret::new(Code::new("8675").unwrap()));
        let app = App::new(engine, true);

        assert!(app.messages.iter().any(|m| m.text.contains("8675")));
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(&["1234"]);
        for _ in 0..10 {
            app.add_message("spam", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
