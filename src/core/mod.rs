//! Core domain types for Mastermind
//!
//! Codes, hints and the scoring rule. Everything here is pure and free of I/O.

mod code;
mod hint;

pub use code::{Code, CodeError, is_valid_format};
pub use hint::Hint;

/// Digits in every code
pub const CODE_LENGTH: usize = 4;

/// Highest digit value a code may hold (digits run 0 through 9)
pub const MAX_DIGIT: u8 = 9;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 10;
