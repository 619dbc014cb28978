//! TUI rendering with ratatui
//!
//! Board, attempts gauge and session panel for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::MAX_ATTEMPTS;
use crate::game::SecretSource;
use crate::output::formatters::{Urgency, hint_label, hint_to_pegs, urgency};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: SecretSource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Crack the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let round = app.engine.round();
    let history = round.history();

    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS + 1);
    for turn in 0..MAX_ATTEMPTS {
        let line = if let Some((guess, hint)) = history.get(turn) {
            let style = if hint.is_perfect() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{:>2}. ", turn + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(guess.to_string(), style),
                Span::raw("   "),
                Span::styled(hint_to_pegs(*hint), Style::default().fg(Color::Yellow)),
                Span::raw("   "),
                Span::raw(hint_label(*hint)),
            ])
        } else {
            Line::from(Span::styled(
                format!("{:>2}. ····", turn + 1),
                Style::default().fg(Color::DarkGray),
            ))
        };
        lines.push(line);
    }

    if let Some(secret) = round.revealed_secret() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Secret: "),
            Span::styled(
                secret.to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_side_panel<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(6), // Session stats
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_session(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let remaining = app.engine.round().attempts_remaining();
    let color = match urgency(remaining) {
        Urgency::Normal => Color::Cyan,
        Urgency::Caution => Color::Yellow,
        Urgency::Warning => Color::Red,
    };
    let percent = (remaining * 100 / MAX_ATTEMPTS) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Remaining ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{MAX_ATTEMPTS}"));

    f.render_widget(gauge, area);
}

fn render_session<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stats = app.log.stats();

    let mut content = vec![
        Line::from(format!("Games played: {}", stats.games_played)),
        Line::from(format!(
            "Games won:    {} ({:.0}%)",
            stats.games_won,
            stats.win_rate()
        )),
    ];
    if stats.games_won > 0 {
        content.push(Line::from(format!(
            "Avg guesses:  {:.2}",
            stats.average_attempts
        )));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter your 4-digit guess | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let game_text = format!("Game #{}", app.engine.games_started());
    f.render_widget(
        Paragraph::new(game_text).alignment(Alignment::Center),
        chunks[0],
    );

    let attempt_text = format!(
        "Attempt {}/{MAX_ATTEMPTS}",
        app.engine.round().attempts_made()
    );
    f.render_widget(
        Paragraph::new(attempt_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "q: Quit | n: New Game | Enter: Submit | Backspace: Delete",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
