//! # rust-hangman
//!
//! A hangman word-guessing game engine with serializable session state.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: `GameState` is a value type. No I/O, no clocks, no
//!    shared mutable state; every operation is synchronous and atomic.
//!
//! 2. **Derived, Not Mutated**: The revealed word and the win/lose outcome
//!    are recomputed from the immutable secret word plus the guessed-letter
//!    sets. There is no working copy to keep consistent.
//!
//! 3. **Collaborators Behind Seams**: Word acquisition is a trait
//!    (`WordSource`); persistence is an encoding boundary (`snapshot`).
//!    The surrounding system owns transports and stores.
//!
//! ## Modules
//!
//! - `core`: Game state, status, rule configuration, errors
//! - `words`: Word source seam and the bundled word list
//! - `snapshot`: Opaque encode/decode of a session for persistence
//!
//! ## Example
//!
//! ```
//! use rust_hangman::{GameState, GameStatus};
//!
//! let mut game = GameState::new("cat");
//!
//! assert_eq!(game.guess("c"), Ok(true));
//! assert_eq!(game.guess("x"), Ok(true));
//! assert_eq!(game.word_with_guesses(), "c--");
//!
//! game.guess("a").unwrap();
//! game.guess("t").unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

pub mod core;
pub mod snapshot;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameState, GameStatus, GuessError,
    DEFAULT_MAX_WRONG_GUESSES, DEFAULT_PLACEHOLDER,
};

pub use crate::words::{WordList, WordSource, DEFAULT_WORDS};

pub use crate::snapshot::SnapshotError;
