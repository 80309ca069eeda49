//! Core engine types: game state, status, configuration, errors.
//!
//! Everything here is a pure value; no I/O, no clocks, no randomness. Word
//! acquisition and persistence live in the `words` and `snapshot` modules.

pub mod config;
pub mod error;
pub mod state;
pub mod status;

pub use config::{GameConfig, DEFAULT_MAX_WRONG_GUESSES, DEFAULT_PLACEHOLDER};
pub use error::GuessError;
pub use state::GameState;
pub use status::GameStatus;
