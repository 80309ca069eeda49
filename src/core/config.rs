//! Game rule configuration.
//!
//! The classic game is the default configuration: seven wrong guesses and a
//! `-` placeholder. Sessions that want a different difficulty or display
//! configure it here rather than the engine hardcoding variants.

use serde::{Deserialize, Serialize};

/// Wrong guesses allowed before the game is lost, in the classic rules.
pub const DEFAULT_MAX_WRONG_GUESSES: usize = 7;

/// Placeholder shown for unrevealed positions, in the classic rules.
pub const DEFAULT_PLACEHOLDER: char = '-';

/// Rules for one hangman session.
///
/// Embedded in [`crate::GameState`] so a persisted session carries its own
/// rules across requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Wrong guesses allowed before the game is lost.
    pub max_wrong_guesses: usize,

    /// Character shown for unrevealed positions.
    pub placeholder: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl GameConfig {
    /// Create the classic configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrong-guess limit.
    ///
    /// ## Panics
    ///
    /// Panics if `limit` is zero; a game that is lost before the first guess
    /// is not playable.
    #[must_use]
    pub fn with_max_wrong_guesses(mut self, limit: usize) -> Self {
        assert!(limit > 0, "Wrong-guess limit must be at least 1");
        self.max_wrong_guesses = limit;
        self
    }

    /// Set the placeholder character.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }
}
