//! Game flow
//!
//! Secret generation, the per-game state machine, replay and session
//! statistics. No terminal I/O happens in this module.

mod engine;
mod round;
mod secret;
mod stats;

pub use engine::Engine;
pub use round::{GameStatus, Rejection, Round, Submission};
pub use secret::{FixedSecret, RandomSecret, SecretSource};
pub use stats::{GameSummary, SessionLog, SessionStats};
