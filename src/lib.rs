//! Mastermind
//!
//! A digit code-breaking game: crack a secret 4-digit code in 10 guesses,
//! guided by exact (`+`) and partial (`-`) hints. Ships a TUI, a line-based
//! console mode and an automatic solver.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Hint};
//!
//! let secret = Code::new("1234").unwrap();
//! let guess = Code::new("4233").unwrap();
//!
//! let hint = Hint::score(&secret, &guess);
//! assert_eq!(hint.to_string(), "++-");
//! ```

// Core domain types
pub mod core;

// Round engine, secret generation and session statistics
pub mod game;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
