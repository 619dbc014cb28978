//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Hint};

/// How loudly to show the remaining-attempts counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Caution,
    Warning,
}

/// Urgency for a given number of attempts left
///
/// Fewer than 6 left is a caution, fewer than 4 a warning.
#[must_use]
pub const fn urgency(remaining: usize) -> Urgency {
    if remaining < 4 {
        Urgency::Warning
    } else if remaining < 6 {
        Urgency::Caution
    } else {
        Urgency::Normal
    }
}

/// Hint as text, with a readable stand-in when nothing matched
#[must_use]
pub fn hint_label(hint: Hint) -> String {
    let text = hint.to_string();
    if text.is_empty() {
        "(none)".to_string()
    } else {
        text
    }
}

/// Hint as four pegs: ● exact, ○ partial, · miss
#[must_use]
pub fn hint_to_pegs(hint: Hint) -> String {
    let exact = usize::from(hint.exact());
    let partial = usize::from(hint.partial());
    let miss = CODE_LENGTH.saturating_sub(exact + partial);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(partial), "·".repeat(miss))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
