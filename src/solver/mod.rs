//! Automatic code breaking
//!
//! Candidate filtering plus pluggable guess selection strategies.

mod engine;
pub mod minimax;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{FirstStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
